use strum_macros::{Display, EnumIter, EnumString};

/// The fixed set of moods the resolver understands. Anything that doesn't
/// parse into one of these is the "Invalid Mood" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Relaxed,
}

impl Mood {
    /// Genre tags suitable for this mood; one is picked at random per request
    /// and sent to the API as the `tag` parameter.
    pub fn genres(self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &["pop", "dance", "electronic"],
            Mood::Sad => &["indie", "alternative", "folk"],
            Mood::Stressed => &["ambient", "chillout", "new age"],
            Mood::Relaxed => &["jazz", "classical", "acoustic"],
        }
    }

    /// Curated offline (track, artist) pairs, used whenever the live lookup
    /// is unavailable or unusable.
    pub fn fallback_songs(self) -> &'static [(&'static str, &'static str); 3] {
        match self {
            Mood::Happy => &[
                ("Happy", "Pharrell Williams"),
                ("Good as Hell", "Lizzo"),
                ("Uptown Funk", "Bruno Mars"),
            ],
            Mood::Sad => &[
                ("Someone Like You", "Adele"),
                ("Hurt", "Johnny Cash"),
                ("Mad World", "Gary Jules"),
            ],
            Mood::Stressed => &[
                ("Weightless", "Marconi Union"),
                ("Clair de Lune", "Debussy"),
                ("Aqueous Transmission", "Incubus"),
            ],
            Mood::Relaxed => &[
                ("Take Five", "Dave Brubeck"),
                ("Blue in Green", "Miles Davis"),
                ("River", "Joni Mitchell"),
            ],
        }
    }
}
