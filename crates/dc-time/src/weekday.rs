//! `Weekday` — day-of-week enum with Portuguese labels.
//!
//! Two numbering conventions are in use downstream and both are exposed:
//! ISO (Monday = 1 … Sunday = 7) and the Sunday-first convention used by the
//! date-dimension table (Sunday = 1 … Saturday = 7).

/// Day of the week.
///
/// The discriminants follow ISO-8601 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

const FROM_MONDAY: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Construct from the ISO number (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number_from_monday(n: u8) -> Option<Self> {
        (1..=7).contains(&n).then(|| FROM_MONDAY[n as usize - 1])
    }

    /// Construct from the Sunday-first number (1 = Sunday … 7 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number_from_sunday(n: u8) -> Option<Self> {
        (1..=7).contains(&n).then(|| Self::from_monday_offset((n + 5) % 7))
    }

    /// Weekday `offset` days after Monday, taken modulo 7.
    pub(crate) fn from_monday_offset(offset: u8) -> Self {
        FROM_MONDAY[(offset % 7) as usize]
    }

    /// Return the ISO number (1 = Monday … 7 = Sunday).
    pub fn number_from_monday(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-first number (1 = Sunday … 7 = Saturday).
    pub fn number_from_sunday(&self) -> u8 {
        *self as u8 % 7 + 1
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if this is Monday–Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Portuguese name (`"Segunda-feira"`, …, `"Domingo"`).
    ///
    /// Fixed table, independent of the process locale.
    pub fn name_pt(&self) -> &'static str {
        match self {
            Weekday::Monday => "Segunda-feira",
            Weekday::Tuesday => "Terça-feira",
            Weekday::Wednesday => "Quarta-feira",
            Weekday::Thursday => "Quinta-feira",
            Weekday::Friday => "Sexta-feira",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }

    /// Three-letter Portuguese abbreviation (`"Seg"`, …, `"Dom"`).
    pub fn short_name_pt(&self) -> &'static str {
        match self {
            Weekday::Monday => "Seg",
            Weekday::Tuesday => "Ter",
            Weekday::Wednesday => "Qua",
            Weekday::Thursday => "Qui",
            Weekday::Friday => "Sex",
            Weekday::Saturday => "Sáb",
            Weekday::Sunday => "Dom",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name_pt())
    }
}
