//! Rendering options.
//!
//! A [`RenderConfig`] is an immutable set of validated option values. It is
//! built with a [`RenderConfigBuilder`], either from typed [`Setting`] keys or
//! from `key=value` strings.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A rendering option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    /// Adds to each class node the table of the properties belonging to the class.
    ClassPropertiesMap,
    /// Reserved, accepted but not used yet.
    EntityAnnotations,
    ClassColor,
    DatatypeColor,
    IndividualColor,
    ObjectPropertyColor,
    DataPropertyColor,
    AnnotationPropertyColor,
    LiteralColor,
    /// Background of the class expression table headers.
    ClassExpressionColor,
    ComponentRestrictionColor,
    ComponentsClassExpressionColor,
    ComplementOfClassExpressionColor,
    /// Length of a row of a wrapped literal, at least 3.
    LiteralRowLength,
    /// Maximal number of rows of a wrapped literal, at least 1.
    LiteralMaxRows,
}

impl Setting {
    /// Every setting, in documentation order.
    pub const ALL: [Self; 15] = [
        Self::ClassPropertiesMap,
        Self::EntityAnnotations,
        Self::ClassColor,
        Self::DatatypeColor,
        Self::IndividualColor,
        Self::ObjectPropertyColor,
        Self::DataPropertyColor,
        Self::AnnotationPropertyColor,
        Self::LiteralColor,
        Self::ClassExpressionColor,
        Self::ComponentRestrictionColor,
        Self::ComponentsClassExpressionColor,
        Self::ComplementOfClassExpressionColor,
        Self::LiteralRowLength,
        Self::LiteralMaxRows,
    ];

    /// The key used in `key=value` strings.
    pub fn key(self) -> &'static str {
        match self {
            Self::ClassPropertiesMap => "classPropertiesMap",
            Self::EntityAnnotations => "entityAnnotations",
            Self::ClassColor => "classColor",
            Self::DatatypeColor => "datatypeColor",
            Self::IndividualColor => "individualColor",
            Self::ObjectPropertyColor => "objectPropertyColor",
            Self::DataPropertyColor => "dataPropertyColor",
            Self::AnnotationPropertyColor => "annotationPropertyColor",
            Self::LiteralColor => "literalColor",
            Self::ClassExpressionColor => "classExpressionColor",
            Self::ComponentRestrictionColor => "componentRestrictionColor",
            Self::ComponentsClassExpressionColor => "componentsClassExpressionColor",
            Self::ComplementOfClassExpressionColor => "complementOfClassExpressionColor",
            Self::LiteralRowLength => "literalRowLength",
            Self::LiteralMaxRows => "literalMaxRows",
        }
    }

    /// The type of the values of this setting.
    pub fn value_type(self) -> ValueType {
        match self {
            Self::ClassPropertiesMap | Self::EntityAnnotations => ValueType::Boolean,
            Self::LiteralRowLength | Self::LiteralMaxRows => ValueType::Integer,
            _ => ValueType::String,
        }
    }

    /// The value used when the setting is not set.
    pub fn default_value(self) -> SettingValue {
        match self {
            Self::ClassPropertiesMap | Self::EntityAnnotations => SettingValue::Boolean(false),
            Self::ClassColor => "#CFA500".into(),
            Self::DatatypeColor => "#AD3B45".into(),
            Self::IndividualColor => "#874B82".into(),
            Self::ObjectPropertyColor => "#0079BA".into(),
            Self::DataPropertyColor => "#38A14A".into(),
            Self::AnnotationPropertyColor => "#D17A00".into(),
            Self::LiteralColor => "gray".into(),
            Self::ClassExpressionColor => "#CCCC00".into(),
            Self::ComponentRestrictionColor => "yellow1".into(),
            Self::ComponentsClassExpressionColor => "yellow2".into(),
            Self::ComplementOfClassExpressionColor => "yellow3".into(),
            Self::LiteralRowLength => SettingValue::Integer(42),
            Self::LiteralMaxRows => SettingValue::Integer(4),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Setting {
    type Err = ConfigError;

    fn from_str(key: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_owned()))
    }
}

/// The type of a [`Setting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    String,
    Integer,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Integer => "integer",
        })
    }
}

/// The value of a [`Setting`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingValue {
    Boolean(bool),
    String(String),
    Integer(i64),
}

impl SettingValue {
    #[inline]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Boolean(_) => ValueType::Boolean,
            Self::String(_) => ValueType::String,
            Self::Integer(_) => ValueType::Integer,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => v.fmt(f),
            Self::String(v) => f.write_str(v),
            Self::Integer(v) => v.fmt(f),
        }
    }
}

impl From<bool> for SettingValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for SettingValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for SettingValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for SettingValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for SettingValue {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

/// Validated rendering options.
///
/// ```
/// use oxdot::{RenderConfig, Setting};
///
/// let config = RenderConfig::builder()
///     .set(Setting::ClassColor, "red")
///     .set_raw("literalMaxRows", "2")?
///     .build()?;
/// assert_eq!(config.color(Setting::ClassColor), "red");
/// assert_eq!(config.literal_max_rows(), 2);
/// assert!(!config.class_properties_map());
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    values: [SettingValue; Setting::ALL.len()],
    literal_row_length: usize,
    literal_max_rows: usize,
}

impl RenderConfig {
    #[inline]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Returns the value of a setting.
    #[inline]
    pub fn get(&self, setting: Setting) -> &SettingValue {
        &self.values[setting.index()]
    }

    /// Returns the value of a boolean setting, `false` for the other settings.
    pub fn flag(&self, setting: Setting) -> bool {
        matches!(self.get(setting), SettingValue::Boolean(true))
    }

    /// Returns the value of a string setting, `""` for the other settings.
    pub fn color(&self, setting: Setting) -> &str {
        match self.get(setting) {
            SettingValue::String(v) => v,
            _ => "",
        }
    }

    #[inline]
    pub fn class_properties_map(&self) -> bool {
        self.flag(Setting::ClassPropertiesMap)
    }

    #[inline]
    pub fn literal_row_length(&self) -> usize {
        self.literal_row_length
    }

    #[inline]
    pub fn literal_max_rows(&self) -> usize {
        self.literal_max_rows
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            values: Setting::ALL.map(Setting::default_value),
            literal_row_length: 42,
            literal_max_rows: 4,
        }
    }
}

/// Builds a [`RenderConfig`].
///
/// Values are only checked by [`RenderConfigBuilder::build`], except the ones
/// given as strings to [`RenderConfigBuilder::set_raw`] that must parse.
#[derive(Debug, Clone)]
#[must_use]
pub struct RenderConfigBuilder {
    values: [SettingValue; Setting::ALL.len()],
}

impl RenderConfigBuilder {
    /// Sets a setting value.
    pub fn set(mut self, setting: Setting, value: impl Into<SettingValue>) -> Self {
        self.values[setting.index()] = value.into();
        self
    }

    /// Sets a setting from its key and the string form of its value.
    ///
    /// Booleans are `true` or `false`, integers are decimal.
    pub fn set_raw(self, key: &str, value: &str) -> Result<Self, ConfigError> {
        let setting = key.parse::<Setting>()?;
        let value = match setting.value_type() {
            ValueType::Boolean => match value {
                "true" => SettingValue::Boolean(true),
                "false" => SettingValue::Boolean(false),
                _ => return Err(mismatch(setting, ValueType::String)),
            },
            ValueType::String => value.into(),
            ValueType::Integer => SettingValue::Integer(
                value
                    .trim()
                    .parse()
                    .map_err(|_| mismatch(setting, ValueType::String))?,
            ),
        };
        Ok(self.set(setting, value))
    }

    /// Validates the values and builds the configuration.
    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        for setting in Setting::ALL {
            let value = &self.values[setting.index()];
            if value.value_type() != setting.value_type() {
                return Err(mismatch(setting, value.value_type()));
            }
            if let SettingValue::String(color) = value {
                if color.trim().is_empty() {
                    return Err(invalid(setting, "the color is empty"));
                }
                if color.contains('"') {
                    return Err(invalid(setting, "the color contains a double quote"));
                }
            }
        }
        let literal_row_length = self.integer(Setting::LiteralRowLength, 3)?;
        let literal_max_rows = self.integer(Setting::LiteralMaxRows, 1)?;
        Ok(RenderConfig {
            values: self.values,
            literal_row_length,
            literal_max_rows,
        })
    }

    fn integer(&self, setting: Setting, min: usize) -> Result<usize, ConfigError> {
        let SettingValue::Integer(value) = self.values[setting.index()] else {
            return Err(mismatch(setting, self.values[setting.index()].value_type()));
        };
        usize::try_from(value)
            .ok()
            .filter(|v| *v >= min)
            .ok_or_else(|| invalid(setting, format!("{value} is lower than {min}")))
    }
}

impl Default for RenderConfigBuilder {
    fn default() -> Self {
        Self {
            values: Setting::ALL.map(Setting::default_value),
        }
    }
}

fn mismatch(setting: Setting, found: ValueType) -> ConfigError {
    ConfigError::TypeMismatch {
        key: setting.key(),
        expected: setting.value_type(),
        found,
    }
}

fn invalid(setting: Setting, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: setting.key(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(RenderConfig::builder().build().unwrap(), config);
        assert_eq!(config.color(Setting::ClassColor), "#CFA500");
        assert_eq!(config.color(Setting::LiteralColor), "gray");
        assert_eq!(config.literal_row_length(), 42);
        assert_eq!(config.literal_max_rows(), 4);
        assert!(!config.flag(Setting::EntityAnnotations));
    }

    #[test]
    fn test_keys_round_trip() {
        for setting in Setting::ALL {
            assert_eq!(setting.key().parse::<Setting>().unwrap(), setting);
            assert_eq!(setting.default_value().value_type(), setting.value_type());
        }
    }

    #[test]
    fn test_set_raw() -> Result<(), ConfigError> {
        let config = RenderConfig::builder()
            .set_raw("classPropertiesMap", "true")?
            .set_raw("literalRowLength", "10")?
            .set_raw("individualColor", "blue")?
            .build()?;
        assert!(config.class_properties_map());
        assert_eq!(config.literal_row_length(), 10);
        assert_eq!(config.color(Setting::IndividualColor), "blue");
        Ok(())
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            RenderConfig::builder().set_raw("classColour", "red"),
            Err(ConfigError::UnknownKey(k)) if k == "classColour"
        ));
    }

    #[test]
    fn test_type_mismatch() {
        assert!(matches!(
            RenderConfig::builder().set(Setting::LiteralMaxRows, "4").build(),
            Err(ConfigError::TypeMismatch {
                key: "literalMaxRows",
                expected: ValueType::Integer,
                found: ValueType::String
            })
        ));
        assert!(matches!(
            RenderConfig::builder().set_raw("classPropertiesMap", "yes"),
            Err(ConfigError::TypeMismatch { .. })
        ));
        assert!(matches!(
            RenderConfig::builder().set(Setting::ClassColor, true).build(),
            Err(ConfigError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_values() {
        for builder in [
            RenderConfig::builder().set(Setting::LiteralRowLength, 2_i64),
            RenderConfig::builder().set(Setting::LiteralMaxRows, 0_i64),
            RenderConfig::builder().set(Setting::LiteralMaxRows, -1_i64),
            RenderConfig::builder().set(Setting::ClassColor, ""),
            RenderConfig::builder().set(Setting::ClassColor, "\"red"),
        ] {
            assert!(matches!(
                builder.build(),
                Err(ConfigError::InvalidValue { .. })
            ));
        }
    }
}
