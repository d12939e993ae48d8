//! `Month` — month-of-year enum with Portuguese labels.

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        (1..=12).contains(&n).then(|| Self::ALL[n as usize - 1])
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the quarter (1–4).
    pub fn quarter(&self) -> u8 {
        (self.number() - 1) / 3 + 1
    }

    /// Return the half-year (1 for January–June, 2 otherwise).
    pub fn half_year(&self) -> u8 {
        if self.number() <= 6 {
            1
        } else {
            2
        }
    }

    /// Return the three-letter Portuguese abbreviation (`"Jan"`, `"Fev"`, …).
    pub fn short_name_pt(&self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Fev",
            Month::March => "Mar",
            Month::April => "Abr",
            Month::May => "Mai",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Ago",
            Month::September => "Set",
            Month::October => "Out",
            Month::November => "Nov",
            Month::December => "Dez",
        }
    }

    /// Return the full Portuguese name (`"Janeiro"`, `"Fevereiro"`, …).
    pub fn name_pt(&self) -> &'static str {
        match self {
            Month::January => "Janeiro",
            Month::February => "Fevereiro",
            Month::March => "Março",
            Month::April => "Abril",
            Month::May => "Maio",
            Month::June => "Junho",
            Month::July => "Julho",
            Month::August => "Agosto",
            Month::September => "Setembro",
            Month::October => "Outubro",
            Month::November => "Novembro",
            Month::December => "Dezembro",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name_pt())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}
