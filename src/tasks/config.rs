/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Settings for the binaries, read from YAML.
//!
//! Every key is optional.  Keys that aren't recognized produce a warning
//! rather than an error, which catches typos without being a nuisance.

use crate::FailResult;
use failure::ResultExt;
use std::io::Read;
use std::path::Path;

/// Alternative to `serde_yaml::from_reader` that warns about unused keys.
pub trait YamlRead: for<'de> ::serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, ::serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml::Value is one.
        let value: ::serde_yaml::Value = ::serde_yaml::from_reader(&mut r)?;
        Self::from_value(value)
    }

    fn from_value(value: ::serde_yaml::Value) -> Result<Self, ::serde_yaml::Error> {
        ::serde_ignored::deserialize(
            value,
            |path| warn!("Unused config item (possible typo?): {}", path),
        )
    }
}

impl YamlRead for Settings {}

#[derive(Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub display: Display,

    #[serde(default)]
    pub gram_schmidt: GramSchmidt,
}

#[derive(Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Display {
    #[serde(default)]
    pub style: DisplayStyle,

    /// Print the matrix after every command in an eliminator session.
    #[serde(default = "_display__echo")]
    pub echo: bool,
}
#[allow(non_snake_case)]
fn _display__echo() -> bool { true }

impl Default for Display {
    fn default() -> Self {
        Display { style: Default::default(), echo: _display__echo() }
    }
}

#[derive(Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayStyle {
    /// One row per line, entries separated by tabs.
    Tabs,
    /// Nested brackets, e.g. `[[1, 2], [3, 4]]`.
    List,
}

impl Default for DisplayStyle {
    fn default() -> Self { DisplayStyle::Tabs }
}

#[derive(Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct GramSchmidt {
    /// Scale the orthogonal basis to unit vectors.
    #[serde(default)]
    pub normalize: bool,
}

/// Settings that have passed `Settings::validate`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidatedSettings(Settings);

impl ::std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Settings { &self.0 }
}

impl Settings {
    pub fn validate(self) -> FailResult<ValidatedSettings> {
        debug!("effective settings: {:?}", self);
        Ok(ValidatedSettings(self))
    }

    pub fn read_file(path: &Path) -> FailResult<Settings> {
        let file = ::std::fs::File::open(path)
            .with_context(|e| format!("while opening config '{}': {}", path.display(), e))?;
        let settings = YamlRead::from_reader(file)
            .with_context(|e| format!("while parsing config '{}': {}", path.display(), e))?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let settings: Settings = YamlRead::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.display.echo);
        assert_eq!(settings.display.style, DisplayStyle::Tabs);
        assert!(!settings.gram_schmidt.normalize);
    }

    #[test]
    fn kebab_case_keys() {
        let yaml = "
display:
  style: list
  echo: false
gram-schmidt:
  normalize: true
";
        let settings: Settings = YamlRead::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(settings.display.style, DisplayStyle::List);
        assert!(!settings.display.echo);
        assert!(settings.gram_schmidt.normalize);
    }

    #[test]
    fn unknown_keys_are_not_fatal() {
        let yaml = "display: { stlye: list }";
        let settings: Settings = YamlRead::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(settings.display.style, DisplayStyle::Tabs);
    }

    #[test]
    fn bad_values_are_fatal() {
        let yaml = "display: { style: fancy }";
        assert!(<Settings as YamlRead>::from_reader(yaml.as_bytes()).is_err());
    }
}
