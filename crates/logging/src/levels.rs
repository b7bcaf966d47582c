//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Names of the inputs being hashed.
    Name,
    /// End-of-run totals.
    Stats,
}

impl InfoFlag {
    /// Every info flag, in the order they are listed in help output.
    pub const ALL: [Self; 2] = [Self::Name, Self::Stats];

    /// Token used on the command line for this flag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Stats => "stats",
        }
    }

    /// Looks up a flag by its command-line token.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == name)
    }
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Digest computation.
    Hash,
    /// Input reads.
    Io,
}

impl DebugFlag {
    /// Every debug flag, in the order they are listed in help output.
    pub const ALL: [Self; 2] = [Self::Hash, Self::Io];

    /// Token used on the command line for this flag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Io => "io",
        }
    }

    /// Looks up a flag by its command-line token.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == name)
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Input name level.
    pub name: u8,
    /// Statistics level.
    pub stats: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub const fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Name => self.name,
            InfoFlag::Stats => self.stats,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Name => self.name = level,
            InfoFlag::Stats => self.stats = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.name = level;
        self.stats = level;
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Digest computation level.
    pub hash: u8,
    /// Input read level.
    pub io: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub const fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Hash => self.hash,
            DebugFlag::Io => self.io,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Hash => self.hash = level,
            DebugFlag::Io => self.io = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.hash = level;
        self.io = level;
    }
}
