use crate::encoding::{Code, impl_encoding};

/// Succession pathway followed after a disturbance.
///
/// Regeneration means the landscape still holds material that resprouting
/// species can use. Secondary succession is recolonisation, as opposed to
/// primary succession on bare ground.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Succession {
    Regeneration = 0,
    Secondary = 1,
}

impl Succession {
    pub const ALL: [Self; 2] = [Self::Regeneration, Self::Secondary];

    pub const fn value(self) -> Code {
        self as Code
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Regeneration => "REGENERATION",
            Self::Secondary => "SECONDARY",
        }
    }

    pub const fn alias(self) -> &'static str {
        match self {
            Self::Regeneration => "regeneration",
            Self::Secondary => "secondary",
        }
    }
}

impl_encoding!(Succession);

/// Binary aspect: which way the slope of the land faces.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    North = 0,
    South = 1,
}

impl Aspect {
    pub const ALL: [Self; 2] = [Self::North, Self::South];

    pub const fn value(self) -> Code {
        self as Code
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::South => "SOUTH",
        }
    }

    pub const fn alias(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
        }
    }
}

impl_encoding!(Aspect);

/// Presence of oak, pine or deciduous seeds.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedPresence {
    False = 0,
    True = 1,
}

impl SeedPresence {
    pub const ALL: [Self; 2] = [Self::False, Self::True];

    pub const fn value(self) -> Code {
        self as Code
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::False => "FALSE",
            Self::True => "TRUE",
        }
    }

    pub const fn alias(self) -> &'static str {
        match self {
            Self::False => "false",
            Self::True => "true",
        }
    }
}

impl From<bool> for SeedPresence {
    fn from(present: bool) -> Self {
        if present { Self::True } else { Self::False }
    }
}

impl From<SeedPresence> for bool {
    fn from(value: SeedPresence) -> Self {
        value == SeedPresence::True
    }
}

impl_encoding!(SeedPresence);

/// Discretisation of soil moisture levels.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Water {
    Xeric = 0,
    Mesic = 1,
    Hydric = 2,
}

impl Water {
    pub const ALL: [Self; 3] = [Self::Xeric, Self::Mesic, Self::Hydric];

    pub const fn value(self) -> Code {
        self as Code
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Xeric => "XERIC",
            Self::Mesic => "MESIC",
            Self::Hydric => "HYDRIC",
        }
    }

    pub const fn alias(self) -> &'static str {
        match self {
            Self::Xeric => "xeric",
            Self::Mesic => "mesic",
            Self::Hydric => "hydric",
        }
    }
}

impl_encoding!(Water);
