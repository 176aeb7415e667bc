/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! IVI style property paths.
//!
//! Every attribute the driver exposes has a dotted path such as
//! `channels[].noise_filter` or `trigger.type`. A concrete path names the
//! channel inside the brackets, either by name (`channels[C1]`) or by
//! position (`channels[0]`). [`Hdo::get`] and [`Hdo::set`] dispatch a path to
//! the typed accessor of the attribute.

use std::fmt;
use std::str::FromStr;

use crate::attributes::{BandwidthLimit, Interpolation, NoiseFilter, TriggerType};
use crate::scope::Hdo;
use crate::transport::Transport;
use crate::{Error, Result};

/// Per-channel attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelProperty {
    Label,
    LabelPosition,
    BwLimit,
    Invert,
    NoiseFilter,
    Interpolation,
    ProbeSkew,
}

impl ChannelProperty {
    pub const ALL: [ChannelProperty; 7] = [
        ChannelProperty::Label,
        ChannelProperty::LabelPosition,
        ChannelProperty::BwLimit,
        ChannelProperty::Invert,
        ChannelProperty::NoiseFilter,
        ChannelProperty::Interpolation,
        ChannelProperty::ProbeSkew,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChannelProperty::Label => "label",
            ChannelProperty::LabelPosition => "label_position",
            ChannelProperty::BwLimit => "bw_limit",
            ChannelProperty::Invert => "invert",
            ChannelProperty::NoiseFilter => "noise_filter",
            ChannelProperty::Interpolation => "interpolation",
            ChannelProperty::ProbeSkew => "probe_skew",
        }
    }

    pub fn from_name(name: &str) -> Option<ChannelProperty> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Registry path with an empty channel selector, e.g. `channels[].invert`
    pub fn path(self) -> String {
        format!("channels[].{}", self.name())
    }

    /// Label attributes exist on digital channels too, the others are analog only.
    pub fn on_all_channels(self) -> bool {
        matches!(self, ChannelProperty::Label | ChannelProperty::LabelPosition)
    }

    /// Values the setter checks against. Bandwidth limit and interpolation
    /// are only checked in strict mode.
    pub fn allowed_values(self, strict: bool) -> Option<&'static [&'static str]> {
        match self {
            ChannelProperty::NoiseFilter => Some(NoiseFilter::NAMES),
            ChannelProperty::BwLimit if strict => Some(BandwidthLimit::NAMES),
            ChannelProperty::Interpolation if strict => Some(Interpolation::NAMES),
            _ => None,
        }
    }

    pub fn doc(self) -> &'static str {
        match self {
            ChannelProperty::Label => "Text label shown next to the channel trace.",
            ChannelProperty::LabelPosition => {
                "Horizontal position of the label in seconds, e.g. 55e-9 places it at 55 ns."
            }
            ChannelProperty::BwLimit => {
                "Bandwidth limit: Full, 20MHz or 200MHz. Passed through unchecked unless strict."
            }
            ChannelProperty::Invert => "Whether the channel is displayed inverted.",
            ChannelProperty::NoiseFilter => {
                "Enhanced resolution filter: None, 0.5bits, 1bits, 1.5bits, 2bits, 2.5bits or 3bits."
            }
            ChannelProperty::Interpolation => {
                "Interpolation: Linear (default) or Sinxx. Passed through unchecked unless strict."
            }
            ChannelProperty::ProbeSkew => "Channel deskew in seconds.",
        }
    }
}

impl fmt::Display for ChannelProperty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Global trigger attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerProperty {
    Source,
    Type,
}

impl TriggerProperty {
    pub const ALL: [TriggerProperty; 2] = [TriggerProperty::Source, TriggerProperty::Type];

    pub fn name(self) -> &'static str {
        match self {
            TriggerProperty::Source => "source",
            TriggerProperty::Type => "type",
        }
    }

    pub fn path(self) -> String {
        format!("trigger.{}", self.name())
    }

    pub fn allowed_values(self) -> Option<&'static [&'static str]> {
        match self {
            TriggerProperty::Source => None,
            TriggerProperty::Type => Some(TriggerType::NAMES),
        }
    }

    pub fn doc(self) -> &'static str {
        match self {
            TriggerProperty::Source => "Trigger source: a channel name, Ext, ExtDivide10 or Line.",
            TriggerProperty::Type => {
                "Trigger type: dropout, edge, glitch, interval, logic, qualified, runt, \
                 serial, slewrate, tv or width. Case-insensitive."
            }
        }
    }
}

/// A channel, by name or by position in the channel list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    Name(String),
    Index(usize),
}

impl From<&str> for ChannelRef {
    fn from(name: &str) -> Self {
        ChannelRef::Name(name.to_string())
    }
}

impl From<String> for ChannelRef {
    fn from(name: String) -> Self {
        ChannelRef::Name(name)
    }
}

impl From<&String> for ChannelRef {
    fn from(name: &String) -> Self {
        ChannelRef::Name(name.clone())
    }
}

impl From<usize> for ChannelRef {
    fn from(index: usize) -> Self {
        ChannelRef::Index(index)
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChannelRef::Name(name) => f.write_str(name),
            ChannelRef::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Value of any attribute, as carried through [`Hdo::get`] and [`Hdo::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Float(f64),
    Bool(bool),
}

impl Value {
    fn into_str(self, path: &PropertyPath) -> Result<String> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(Error::ValueNotSupported(format!("{} for {}", other, path))),
        }
    }

    fn into_float(self, path: &PropertyPath) -> Result<f64> {
        match self {
            Value::Float(v) => Ok(v),
            other => Err(Error::ValueNotSupported(format!("{} for {}", other, path))),
        }
    }

    fn into_bool(self, path: &PropertyPath) -> Result<bool> {
        match self {
            Value::Bool(v) => Ok(v),
            other => Err(Error::ValueNotSupported(format!("{} for {}", other, path))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// A resolved attribute path.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyPath {
    Channel {
        channel: ChannelRef,
        property: ChannelProperty,
    },
    Trigger(TriggerProperty),
}

impl PropertyPath {
    pub fn channel(channel: impl Into<ChannelRef>, property: ChannelProperty) -> Self {
        PropertyPath::Channel {
            channel: channel.into(),
            property,
        }
    }
}

impl FromStr for PropertyPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPath(s.to_string());

        if let Some(rest) = s.strip_prefix("channels[") {
            let (selector, name) = rest.split_once("].").ok_or_else(invalid)?;
            if selector.is_empty() {
                return Err(invalid());
            }
            let channel = match selector.parse::<usize>() {
                Ok(index) => ChannelRef::Index(index),
                Err(_) => ChannelRef::Name(selector.to_string()),
            };
            let property = ChannelProperty::from_name(name).ok_or_else(invalid)?;
            return Ok(PropertyPath::Channel { channel, property });
        }

        match s {
            "trigger.source" => Ok(PropertyPath::Trigger(TriggerProperty::Source)),
            "trigger.type" => Ok(PropertyPath::Trigger(TriggerProperty::Type)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PropertyPath::Channel { channel, property } => {
                write!(f, "channels[{}].{}", channel, property)
            }
            PropertyPath::Trigger(property) => f.write_str(&property.path()),
        }
    }
}

impl<T: Transport> Hdo<T> {
    /// Reads any attribute by path.
    pub fn get(&mut self, path: &PropertyPath) -> Result<Value> {
        let value = match path {
            PropertyPath::Channel { channel, property } => {
                let channel = channel.clone();
                match property {
                    ChannelProperty::Label => Value::Str(self.label(channel)?),
                    ChannelProperty::LabelPosition => Value::Float(self.label_position(channel)?),
                    ChannelProperty::BwLimit => Value::Str(self.bw_limit(channel)?),
                    ChannelProperty::Invert => Value::Bool(self.invert(channel)?),
                    ChannelProperty::NoiseFilter => {
                        Value::Str(self.noise_filter(channel)?.to_string())
                    }
                    ChannelProperty::Interpolation => Value::Str(self.interpolation(channel)?),
                    ChannelProperty::ProbeSkew => Value::Float(self.probe_skew(channel)?),
                }
            }
            PropertyPath::Trigger(TriggerProperty::Source) => Value::Str(self.trigger_source()?),
            PropertyPath::Trigger(TriggerProperty::Type) => {
                Value::Str(self.trigger_type()?.to_string())
            }
        };
        Ok(value)
    }

    /// Sets any attribute by path. A value of the wrong kind for the
    /// attribute is rejected as not supported.
    pub fn set(&mut self, path: &PropertyPath, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match path {
            PropertyPath::Channel { channel, property } => {
                let channel = channel.clone();
                match property {
                    ChannelProperty::Label => self.set_label(channel, &value.into_str(path)?),
                    ChannelProperty::LabelPosition => {
                        self.set_label_position(channel, value.into_float(path)?)
                    }
                    ChannelProperty::BwLimit => self.set_bw_limit(channel, &value.into_str(path)?),
                    ChannelProperty::Invert => self.set_invert(channel, value.into_bool(path)?),
                    ChannelProperty::NoiseFilter => {
                        self.set_noise_filter(channel, &value.into_str(path)?)
                    }
                    ChannelProperty::Interpolation => {
                        self.set_interpolation(channel, &value.into_str(path)?)
                    }
                    ChannelProperty::ProbeSkew => {
                        self.set_probe_skew(channel, value.into_float(path)?)
                    }
                }
            }
            PropertyPath::Trigger(TriggerProperty::Source) => {
                self.set_trigger_source(&value.into_str(path)?)
            }
            PropertyPath::Trigger(TriggerProperty::Type) => {
                self.set_trigger_type(&value.into_str(path)?)
            }
        }
    }
}
