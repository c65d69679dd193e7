use std::any::Any;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use smallvec::SmallVec;
use thiserror::Error;

/// Error a custom [`Scanner`] reports when it cannot store a value.
pub type ScanError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("unsupported destination type for parameter '{name}'")]
    UnsupportedDestination { name: String },
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),
    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),
    #[error("parameter '{name}' could not be scanned: {source}")]
    Scan {
        name: String,
        #[source]
        source: ScanError,
    },
}

pub type ParamResult<T> = Result<T, ParamError>;

/// User-defined coercion from a raw parameter value.
pub trait Scanner {
    /// Stores `value` into `self`, or fails if that would lose information.
    fn scan(&mut self, value: &str) -> Result<(), ScanError>;
}

/// A captured `(name, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> Param<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn value(&self) -> &'a str {
        self.value
    }
}

/// Parameters captured by a successful match, in path order.
///
/// Names borrow from the trie and values borrow from the request path, so a
/// match allocates nothing until more than four parameters are captured.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params<'a> {
    entries: SmallVec<[Param<'a>; 4]>,
}

impl<'a> Params<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'a str, value: &'a str) {
        self.entries.push(Param { name, value });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().map(|p| (p.name, p.value))
    }

    /// First value captured under `name`.
    pub fn lookup(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value)
    }

    /// Value captured under `name`, or `""` when absent.
    pub fn get(&self, name: &str) -> &'a str {
        self.lookup(name).unwrap_or("")
    }

    /// Absent or empty values read as zero.
    pub fn get_int(&self, name: &str) -> Result<i64, ParseIntError> {
        parse_or_zero(self.get(name))
    }

    /// Absent or empty values read as zero.
    pub fn get_uint(&self, name: &str) -> Result<u64, ParseIntError> {
        parse_or_zero(self.get(name))
    }

    pub fn get_float(&self, name: &str) -> Result<f64, ParseFloatError> {
        self.get(name).parse()
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.lookup(name).map(str::parse)
    }

    /// Coerces the value captured under `name` into `dest`.
    ///
    /// Numeric parse failures are returned unchanged.
    pub fn scan<'d>(&self, name: &str, dest: impl Into<Destination<'d>>) -> ParamResult<()> {
        let value = self.get(name);
        match dest.into() {
            Destination::Text(slot) => {
                slot.clear();
                slot.push_str(value);
            }
            Destination::Bytes(slot) => {
                slot.clear();
                slot.extend_from_slice(value.as_bytes());
            }
            Destination::Signed(slot) => slot.store(value)?,
            Destination::Unsigned(slot) => slot.store(value)?,
            Destination::Float(slot) => slot.store(value)?,
            Destination::Custom(scanner) => {
                scanner.scan(value).map_err(|source| ParamError::Scan {
                    name: name.to_string(),
                    source,
                })?
            }
        }
        Ok(())
    }

    /// Like [`Params::scan`], for destinations only known as `dyn Any`.
    ///
    /// The concrete type is inspected against the supported set; anything
    /// else fails with [`ParamError::UnsupportedDestination`].
    pub fn scan_any(&self, name: &str, dest: &mut dyn Any) -> ParamResult<()> {
        macro_rules! try_downcast {
            ($($ty:ty),* $(,)?) => {
                $(
                    if let Some(slot) = dest.downcast_mut::<$ty>() {
                        return self.scan(name, slot);
                    }
                )*
            };
        }

        try_downcast!(
            String, Vec<u8>, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
        );

        Err(ParamError::UnsupportedDestination {
            name: name.to_string(),
        })
    }
}

impl fmt::Debug for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn parse_or_zero<T: FromStr + Default>(value: &str) -> Result<T, T::Err> {
    if value.is_empty() {
        return Ok(T::default());
    }
    value.parse()
}

/// Target of [`Params::scan`]: a closed set of coercion kinds.
pub enum Destination<'d> {
    Text(&'d mut String),
    Bytes(&'d mut Vec<u8>),
    Signed(Signed<'d>),
    Unsigned(Unsigned<'d>),
    Float(Float<'d>),
    Custom(&'d mut dyn Scanner),
}

impl<'d> Destination<'d> {
    pub fn custom(scanner: &'d mut dyn Scanner) -> Self {
        Destination::Custom(scanner)
    }
}

macro_rules! numeric_slots {
    ($kind:ident, $err:ty, $parse:ident { $($variant:ident => $ty:ty),* $(,)? }) => {
        pub enum $kind<'d> {
            $($variant(&'d mut $ty),)*
        }

        impl $kind<'_> {
            fn store(self, value: &str) -> Result<(), $err> {
                match self {
                    $($kind::$variant(slot) => *slot = $parse(value)?,)*
                }
                Ok(())
            }
        }

        $(
            impl<'d> From<&'d mut $ty> for Destination<'d> {
                fn from(slot: &'d mut $ty) -> Self {
                    Destination::$kind($kind::$variant(slot))
                }
            }
        )*
    };
}

fn parse_float<T: FromStr<Err = ParseFloatError>>(value: &str) -> Result<T, ParseFloatError> {
    value.parse()
}

numeric_slots!(Signed, ParseIntError, parse_or_zero {
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    Isize => isize,
});

numeric_slots!(Unsigned, ParseIntError, parse_or_zero {
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    Usize => usize,
});

numeric_slots!(Float, ParseFloatError, parse_float {
    F32 => f32,
    F64 => f64,
});

impl<'d> From<&'d mut String> for Destination<'d> {
    fn from(slot: &'d mut String) -> Self {
        Destination::Text(slot)
    }
}

impl<'d> From<&'d mut Vec<u8>> for Destination<'d> {
    fn from(slot: &'d mut Vec<u8>) -> Self {
        Destination::Bytes(slot)
    }
}

impl<'d, S: Scanner> From<&'d mut S> for Destination<'d> {
    fn from(scanner: &'d mut S) -> Self {
        Destination::Custom(scanner)
    }
}
