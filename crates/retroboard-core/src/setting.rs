//! Setting — a named, operator-tunable configuration value persisted
//! alongside the domain data.

use serde::{Deserialize, Serialize};

/// A settings row. `setting_type` is descriptive only ("int", "bool",
/// "string"); values are stored and served as strings regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
  pub setting_name:         String,
  pub setting_value:        String,
  pub setting_type:         String,
  pub setting_display_name: String,
  pub setting_description:  String,
}

/// One record of the startup seed list.
///
/// Seeding is insert-if-absent: a default never overwrites a value an
/// operator has already modified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingDefault {
  pub setting_name:         String,
  pub default_value:        String,
  pub setting_type:         String,
  pub setting_display_name: String,
  pub setting_description:  String,
}
