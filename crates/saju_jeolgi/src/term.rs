//! The 24 solar terms (jeolgi) of the sexagenary calendar.
//!
//! Terms alternate sectional (jeol, month-opening) and mid (jung) every 15
//! degrees of solar longitude, starting from Ipchun at 315. The twelve
//! sectional terms bound the twelve month branches; mid terms split each
//! month in half.

use saju_ganji::Branch;

/// The 24 solar terms in annual order starting from Ipchun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baekro,
    Chubun,
    Hanro,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms in annual order (Ipchun=0 .. Daehan=23).
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baekro,
    SolarTerm::Chubun,
    SolarTerm::Hanro,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

/// The 12 sectional terms in annual order (Ipchun first, Sohan last).
pub const SECTIONAL_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baekro,
    SolarTerm::Hanro,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

impl SolarTerm {
    /// Hangul name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Usu => "우수",
            Self::Gyeongchip => "경칩",
            Self::Chunbun => "춘분",
            Self::Cheongmyeong => "청명",
            Self::Gogu => "곡우",
            Self::Ipha => "입하",
            Self::Soman => "소만",
            Self::Mangjong => "망종",
            Self::Haji => "하지",
            Self::Soseo => "소서",
            Self::Daeseo => "대서",
            Self::Ipchu => "입추",
            Self::Cheoseo => "처서",
            Self::Baekro => "백로",
            Self::Chubun => "추분",
            Self::Hanro => "한로",
            Self::Sanggang => "상강",
            Self::Ipdong => "입동",
            Self::Soseol => "소설",
            Self::Daeseol => "대설",
            Self::Dongji => "동지",
            Self::Sohan => "소한",
            Self::Daehan => "대한",
        }
    }

    /// Revised-romanization name.
    pub const fn romanized(self) -> &'static str {
        match self {
            Self::Ipchun => "Ipchun",
            Self::Usu => "Usu",
            Self::Gyeongchip => "Gyeongchip",
            Self::Chunbun => "Chunbun",
            Self::Cheongmyeong => "Cheongmyeong",
            Self::Gogu => "Gogu",
            Self::Ipha => "Ipha",
            Self::Soman => "Soman",
            Self::Mangjong => "Mangjong",
            Self::Haji => "Haji",
            Self::Soseo => "Soseo",
            Self::Daeseo => "Daeseo",
            Self::Ipchu => "Ipchu",
            Self::Cheoseo => "Cheoseo",
            Self::Baekro => "Baekro",
            Self::Chubun => "Chubun",
            Self::Hanro => "Hanro",
            Self::Sanggang => "Sanggang",
            Self::Ipdong => "Ipdong",
            Self::Soseol => "Soseol",
            Self::Daeseol => "Daeseol",
            Self::Dongji => "Dongji",
            Self::Sohan => "Sohan",
            Self::Daehan => "Daehan",
        }
    }

    /// 0-based annual index (Ipchun=0 .. Daehan=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Apparent solar longitude of the term in degrees.
    pub const fn longitude_deg(self) -> f64 {
        match self {
            Self::Ipchun => 315.0,
            Self::Usu => 330.0,
            Self::Gyeongchip => 345.0,
            Self::Chunbun => 0.0,
            Self::Cheongmyeong => 15.0,
            Self::Gogu => 30.0,
            Self::Ipha => 45.0,
            Self::Soman => 60.0,
            Self::Mangjong => 75.0,
            Self::Haji => 90.0,
            Self::Soseo => 105.0,
            Self::Daeseo => 120.0,
            Self::Ipchu => 135.0,
            Self::Cheoseo => 150.0,
            Self::Baekro => 165.0,
            Self::Chubun => 180.0,
            Self::Hanro => 195.0,
            Self::Sanggang => 210.0,
            Self::Ipdong => 225.0,
            Self::Soseol => 240.0,
            Self::Daeseol => 255.0,
            Self::Dongji => 270.0,
            Self::Sohan => 285.0,
            Self::Daehan => 300.0,
        }
    }

    /// Rough calendar date the term falls on; used to seed the longitude
    /// crossing search. Sohan and Daehan sit in January of the same year.
    pub const fn seed_month_day(self) -> (u32, u32) {
        match self {
            Self::Ipchun => (2, 4),
            Self::Usu => (2, 19),
            Self::Gyeongchip => (3, 6),
            Self::Chunbun => (3, 21),
            Self::Cheongmyeong => (4, 5),
            Self::Gogu => (4, 20),
            Self::Ipha => (5, 6),
            Self::Soman => (5, 21),
            Self::Mangjong => (6, 6),
            Self::Haji => (6, 21),
            Self::Soseo => (7, 7),
            Self::Daeseo => (7, 23),
            Self::Ipchu => (8, 8),
            Self::Cheoseo => (8, 23),
            Self::Baekro => (9, 8),
            Self::Chubun => (9, 23),
            Self::Hanro => (10, 8),
            Self::Sanggang => (10, 23),
            Self::Ipdong => (11, 7),
            Self::Soseol => (11, 22),
            Self::Daeseol => (12, 7),
            Self::Dongji => (12, 22),
            Self::Sohan => (1, 6),
            Self::Daehan => (1, 20),
        }
    }

    /// Whether the term opens a month (jeol) rather than splitting one (jung).
    pub const fn is_sectional(self) -> bool {
        self.index() % 2 == 0
    }

    /// Month branch the term belongs to. Sectional terms open their month;
    /// mid terms fall inside it.
    pub const fn month_branch(self) -> Branch {
        match self {
            Self::Ipchun | Self::Usu => Branch::In,
            Self::Gyeongchip | Self::Chunbun => Branch::Myo,
            Self::Cheongmyeong | Self::Gogu => Branch::Jin,
            Self::Ipha | Self::Soman => Branch::Sa,
            Self::Mangjong | Self::Haji => Branch::O,
            Self::Soseo | Self::Daeseo => Branch::Mi,
            Self::Ipchu | Self::Cheoseo => Branch::Sin,
            Self::Baekro | Self::Chubun => Branch::Yu,
            Self::Hanro | Self::Sanggang => Branch::Sul,
            Self::Ipdong | Self::Soseol => Branch::Hae,
            Self::Daeseol | Self::Dongji => Branch::Ja,
            Self::Sohan | Self::Daehan => Branch::Chuk,
        }
    }
}

/// The sectional and mid term of a month branch.
pub const fn terms_for_month(branch: Branch) -> (SolarTerm, SolarTerm) {
    match branch {
        Branch::In => (SolarTerm::Ipchun, SolarTerm::Usu),
        Branch::Myo => (SolarTerm::Gyeongchip, SolarTerm::Chunbun),
        Branch::Jin => (SolarTerm::Cheongmyeong, SolarTerm::Gogu),
        Branch::Sa => (SolarTerm::Ipha, SolarTerm::Soman),
        Branch::O => (SolarTerm::Mangjong, SolarTerm::Haji),
        Branch::Mi => (SolarTerm::Soseo, SolarTerm::Daeseo),
        Branch::Sin => (SolarTerm::Ipchu, SolarTerm::Cheoseo),
        Branch::Yu => (SolarTerm::Baekro, SolarTerm::Chubun),
        Branch::Sul => (SolarTerm::Hanro, SolarTerm::Sanggang),
        Branch::Hae => (SolarTerm::Ipdong, SolarTerm::Soseol),
        Branch::Ja => (SolarTerm::Daeseol, SolarTerm::Dongji),
        Branch::Chuk => (SolarTerm::Sohan, SolarTerm::Daehan),
    }
}
