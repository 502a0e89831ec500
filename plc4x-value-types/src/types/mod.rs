//! PLC value type definitions
//!
//! The closed set of value types a PLC4X driver can tag a value with. Each
//! type pairs a stable wire code with the native representation it maps to.
//! Codes are dictated by the PLC4X protocol descriptions and must not change.

mod registry;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub use registry::ValueTypeRegistry;

/// Native representation backing a value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    /// No value at all
    Absent,
    Boolean,
    UInt8,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    /// Arbitrary-precision unsigned integer
    BigUInt,
    /// IEEE-754 single precision
    Float32,
    /// IEEE-754 double precision
    Float64,
    Char,
    WideChar,
    String,
    WideString,
    Duration,
    LongDuration,
    Date,
    LongDate,
    TimeOfDay,
    LongTimeOfDay,
    DateAndTime,
    DateAndLongTime,
    LongDateAndTime,
    /// String-keyed mapping of arbitrary values
    Struct,
    /// Ordered sequence of arbitrary values
    List,
    /// Ordered sequence of bytes
    RawByteArray,
}

impl NativeKind {
    /// Display name of the kind. [`NativeKind::Absent`] renders as `null`.
    pub const fn name(self) -> &'static str {
        match self {
            NativeKind::Absent => "null",
            NativeKind::Boolean => "Boolean",
            NativeKind::UInt8 => "UInt8",
            NativeKind::Int8 => "Int8",
            NativeKind::Int16 => "Int16",
            NativeKind::Int32 => "Int32",
            NativeKind::Int64 => "Int64",
            NativeKind::UInt16 => "UInt16",
            NativeKind::UInt32 => "UInt32",
            NativeKind::UInt64 => "UInt64",
            NativeKind::BigUInt => "BigUInt",
            NativeKind::Float32 => "Float32",
            NativeKind::Float64 => "Float64",
            NativeKind::Char => "Char",
            NativeKind::WideChar => "WideChar",
            NativeKind::String => "String",
            NativeKind::WideString => "WideString",
            NativeKind::Duration => "Duration",
            NativeKind::LongDuration => "LongDuration",
            NativeKind::Date => "Date",
            NativeKind::LongDate => "LongDate",
            NativeKind::TimeOfDay => "TimeOfDay",
            NativeKind::LongTimeOfDay => "LongTimeOfDay",
            NativeKind::DateAndTime => "DateAndTime",
            NativeKind::DateAndLongTime => "DateAndLongTime",
            NativeKind::LongDateAndTime => "LongDateAndTime",
            NativeKind::Struct => "Struct",
            NativeKind::List => "List",
            NativeKind::RawByteArray => "RawByteArray",
        }
    }
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A PLC value type
///
/// Instances only exist as the associated constants below; use
/// [`PlcValueType::from_code`] or [`ValueTypeRegistry`] to resolve one from
/// a wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlcValueType {
    code: u16,
    name: &'static str,
    native_kind: NativeKind,
}

impl PlcValueType {
    pub const NULL: PlcValueType = PlcValueType::new(0x00, "NULL", NativeKind::Absent);
    pub const BOOL: PlcValueType = PlcValueType::new(0x01, "BOOL", NativeKind::Boolean);
    pub const BYTE: PlcValueType = PlcValueType::new(0x02, "BYTE", NativeKind::UInt8);
    pub const WORD: PlcValueType = PlcValueType::new(0x03, "WORD", NativeKind::Int16);
    pub const DWORD: PlcValueType = PlcValueType::new(0x04, "DWORD", NativeKind::Int32);
    pub const LWORD: PlcValueType = PlcValueType::new(0x05, "LWORD", NativeKind::Int64);
    pub const USINT: PlcValueType = PlcValueType::new(0x11, "USINT", NativeKind::UInt16);
    pub const UINT: PlcValueType = PlcValueType::new(0x12, "UINT", NativeKind::UInt32);
    pub const UDINT: PlcValueType = PlcValueType::new(0x13, "UDINT", NativeKind::UInt64);
    pub const ULINT: PlcValueType = PlcValueType::new(0x14, "ULINT", NativeKind::BigUInt);
    pub const SINT: PlcValueType = PlcValueType::new(0x21, "SINT", NativeKind::Int8);
    pub const INT: PlcValueType = PlcValueType::new(0x22, "INT", NativeKind::Int16);
    pub const DINT: PlcValueType = PlcValueType::new(0x23, "DINT", NativeKind::Int32);
    pub const LINT: PlcValueType = PlcValueType::new(0x24, "LINT", NativeKind::Int64);
    pub const REAL: PlcValueType = PlcValueType::new(0x31, "REAL", NativeKind::Float32);
    pub const LREAL: PlcValueType = PlcValueType::new(0x32, "LREAL", NativeKind::Float64);
    pub const CHAR: PlcValueType = PlcValueType::new(0x41, "CHAR", NativeKind::Char);
    pub const WCHAR: PlcValueType = PlcValueType::new(0x42, "WCHAR", NativeKind::WideChar);
    pub const STRING: PlcValueType = PlcValueType::new(0x43, "STRING", NativeKind::String);
    pub const WSTRING: PlcValueType = PlcValueType::new(0x44, "WSTRING", NativeKind::WideString);
    pub const TIME: PlcValueType = PlcValueType::new(0x51, "TIME", NativeKind::Duration);
    pub const LTIME: PlcValueType = PlcValueType::new(0x52, "LTIME", NativeKind::LongDuration);
    pub const DATE: PlcValueType = PlcValueType::new(0x53, "DATE", NativeKind::Date);
    pub const LDATE: PlcValueType = PlcValueType::new(0x54, "LDATE", NativeKind::LongDate);
    pub const TIME_OF_DAY: PlcValueType =
        PlcValueType::new(0x55, "TIME_OF_DAY", NativeKind::TimeOfDay);
    pub const LTIME_OF_DAY: PlcValueType =
        PlcValueType::new(0x56, "LTIME_OF_DAY", NativeKind::LongTimeOfDay);
    pub const DATE_AND_TIME: PlcValueType =
        PlcValueType::new(0x57, "DATE_AND_TIME", NativeKind::DateAndTime);
    pub const DATE_AND_LTIME: PlcValueType =
        PlcValueType::new(0x58, "DATE_AND_LTIME", NativeKind::DateAndLongTime);
    pub const LDATE_AND_TIME: PlcValueType =
        PlcValueType::new(0x59, "LDATE_AND_TIME", NativeKind::LongDateAndTime);
    pub const STRUCT: PlcValueType = PlcValueType::new(0x61, "Struct", NativeKind::Struct);
    pub const LIST: PlcValueType = PlcValueType::new(0x62, "List", NativeKind::List);
    pub const RAW_BYTE_ARRAY: PlcValueType =
        PlcValueType::new(0x71, "RAW_BYTE_ARRAY", NativeKind::RawByteArray);

    /// Every value type, ordered by code
    pub const ALL: [PlcValueType; 32] = [
        PlcValueType::NULL,
        PlcValueType::BOOL,
        PlcValueType::BYTE,
        PlcValueType::WORD,
        PlcValueType::DWORD,
        PlcValueType::LWORD,
        PlcValueType::USINT,
        PlcValueType::UINT,
        PlcValueType::UDINT,
        PlcValueType::ULINT,
        PlcValueType::SINT,
        PlcValueType::INT,
        PlcValueType::DINT,
        PlcValueType::LINT,
        PlcValueType::REAL,
        PlcValueType::LREAL,
        PlcValueType::CHAR,
        PlcValueType::WCHAR,
        PlcValueType::STRING,
        PlcValueType::WSTRING,
        PlcValueType::TIME,
        PlcValueType::LTIME,
        PlcValueType::DATE,
        PlcValueType::LDATE,
        PlcValueType::TIME_OF_DAY,
        PlcValueType::LTIME_OF_DAY,
        PlcValueType::DATE_AND_TIME,
        PlcValueType::DATE_AND_LTIME,
        PlcValueType::LDATE_AND_TIME,
        PlcValueType::STRUCT,
        PlcValueType::LIST,
        PlcValueType::RAW_BYTE_ARRAY,
    ];

    const fn new(code: u16, name: &'static str, native_kind: NativeKind) -> Self {
        Self {
            code,
            name,
            native_kind,
        }
    }

    /// Wire code of this value type
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Protocol name, e.g. `DINT` or `TIME_OF_DAY`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn native_kind(&self) -> NativeKind {
        self.native_kind
    }

    /// True for [`PlcValueType::NULL`], the defined "no value" type
    pub const fn is_null(&self) -> bool {
        matches!(self.native_kind, NativeKind::Absent)
    }

    /// Resolves a wire code through the global registry
    pub fn from_code(code: u16) -> Option<PlcValueType> {
        ValueTypeRegistry::global().lookup(code)
    }

    pub fn is_defined(code: u16) -> bool {
        ValueTypeRegistry::global().is_defined(code)
    }

    /// Resolves a protocol name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<PlcValueType> {
        ValueTypeRegistry::global().lookup_name(name)
    }

    /// Diagnostic rendering, `PlcValueType(0x23, Int32)`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Returns the first code that appears twice in `table`, if any
pub(crate) const fn first_duplicate_code(table: &[PlcValueType]) -> Option<u16> {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].code == table[j].code {
                return Some(table[i].code);
            }
            j += 1;
        }
        i += 1;
    }
    None
}

const _: () = assert!(
    first_duplicate_code(&PlcValueType::ALL).is_none(),
    "duplicate code in PlcValueType::ALL"
);

impl fmt::Display for PlcValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlcValueType(0x{:X}, {})", self.code, self.native_kind)
    }
}

impl From<PlcValueType> for u16 {
    fn from(value_type: PlcValueType) -> Self {
        value_type.code
    }
}

impl TryFrom<u16> for PlcValueType {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        PlcValueType::from_code(value).ok_or(Error::UnknownCode(value))
    }
}

impl TryFrom<u8> for PlcValueType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PlcValueType::try_from(u16::from(value))
    }
}

impl TryFrom<i16> for PlcValueType {
    type Error = Error;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        let code = u16::try_from(value).map_err(|_| Error::CodeOutOfRange(i32::from(value)))?;
        PlcValueType::try_from(code)
    }
}

impl FromStr for PlcValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlcValueType::from_name(s).ok_or_else(|| Error::UnknownName(s.to_string()))
    }
}
