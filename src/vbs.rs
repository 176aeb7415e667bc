/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Formatting of VBS commands and parsing of their replies.
//!
//! The HDO exposes its automation object model through `VBS` commands:
//! `VBS? 'Return=<path>'` reads a property, `VBS '<path> = <arg>'` sets it.
//! String arguments are double quoted, booleans are the barewords
//! `True`/`False`.

use crate::property::ChannelProperty;
use crate::{Error, Result};

pub const TRIGGER_SOURCE: &str = "app.Acquisition.Trigger.Source";
pub const TRIGGER_TYPE: &str = "app.Acquisition.Trigger.Type";
pub const AUTO_SETUP: &str = "VBS 'app.AutoSetup'";
pub const IDENTIFY: &str = "*IDN?";

fn leaf(property: ChannelProperty) -> &'static str {
    match property {
        ChannelProperty::Label => "LabelsText",
        ChannelProperty::LabelPosition => "LabelsPosition",
        ChannelProperty::BwLimit => "BandwidthLimit",
        ChannelProperty::Invert => "Invert",
        ChannelProperty::NoiseFilter => "EnhanceResType",
        ChannelProperty::Interpolation => "InterpolateType",
        ChannelProperty::ProbeSkew => "Deskew",
    }
}

/// Object path of a channel property, e.g. `app.Acquisition.C1.Deskew`
pub fn channel_path(channel: &str, property: ChannelProperty) -> String {
    format!("app.Acquisition.{}.{}", channel, leaf(property))
}

pub fn query(path: &str) -> String {
    format!("VBS? 'Return={}'", path)
}

pub fn assign(path: &str, argument: &str) -> String {
    format!("VBS '{} = {}'", path, argument)
}

pub fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Quotes free text for use inside a `VBS '...'` command. Embedded double
/// quotes are doubled; a single quote would end the command and is refused.
pub fn text(value: &str) -> Result<String> {
    if value.contains('\'') {
        return Err(Error::ValueNotSupported(value.to_string()));
    }
    Ok(quoted(&value.replace('"', "\"\"")))
}

pub fn boolean(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Makes the labels of `channel` visible on screen.
pub fn view_labels(channel: &str) -> String {
    assign(&format!("app.Acquisition.{}.ViewLabels", channel), boolean(true))
}

/// Scientific notation with six fractional digits and an at least two digit,
/// signed exponent: `5.5e-8` becomes `5.500000e-08`.
pub fn scientific(value: f64) -> String {
    let formatted = format!("{:.6e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        // inf and NaN
        None => formatted,
    }
}

pub fn parse_text(reply: &str) -> String {
    reply.trim().to_string()
}

/// Numeric replies; list-valued properties reply `a|b|...` and only the
/// first field is the value.
pub fn parse_float(reply: &str) -> Result<f64> {
    let field = reply.split('|').next().unwrap_or(reply).trim();
    field
        .parse::<f64>()
        .map_err(|_| Error::UnexpectedResponse(reply.to_string()))
}

/// Boolean properties reply with an integer, nonzero meaning true.
pub fn parse_bool(reply: &str) -> Result<bool> {
    reply
        .trim()
        .parse::<i64>()
        .map(|v| v != 0)
        .map_err(|_| Error::UnexpectedResponse(reply.to_string()))
}

/// Parses an enumerated reply, mapping a value outside the set to
/// `UnexpectedResponse` since the instrument, not the caller, produced it.
pub fn parse_enum<E: std::str::FromStr<Err = Error>>(reply: &str) -> Result<E> {
    reply
        .trim()
        .parse::<E>()
        .map_err(|_| Error::UnexpectedResponse(reply.to_string()))
}
