#![deny(unsafe_code)]

pub mod error;
pub mod flag;
pub mod names;
pub mod table;

pub use crate::error::LookupError;
pub use crate::flag::{GLOBE, flag_emoji};
pub use crate::names::CaseInsensitiveNames;
pub use crate::table::{
    COUNTRIES_ENV_VAR, CountryEntry, CountryTable, UNKNOWN_COUNTRY_CODE, default_country_table,
};
