/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Driver and instrument identification.

use std::str::FromStr;

use crate::config::SUPPORTED_MODELS;
use crate::Error;

/// Static description of this driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub description: &'static str,
    pub vendor: &'static str,
    pub revision: &'static str,
    /// IVI class specification the property model follows (IviScope, 4.1)
    pub specification_major_version: u32,
    pub specification_minor_version: u32,
    pub supported_instrument_models: &'static [&'static str],
}

pub const IDENTITY: Identity = Identity {
    description: "LeCroy HDO series IVI oscilloscope driver",
    vendor: "LeCroy",
    revision: env!("CARGO_PKG_VERSION"),
    specification_major_version: 4,
    specification_minor_version: 1,
    supported_instrument_models: SUPPORTED_MODELS,
};

/// What the connected instrument reports about itself in reply to `*IDN?`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstrumentInfo {
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub firmware_revision: String,
}

impl FromStr for InstrumentInfo {
    type Err = Error;

    /// `MANUFACTURER,MODEL,SERIAL,FIRMWARE`; some firmware prefixes the
    /// reply with a `*IDN ` header.
    fn from_str(s: &str) -> Result<Self, Error> {
        let body = s.trim();
        let body = body.strip_prefix("*IDN ").unwrap_or(body);
        let fields: Vec<&str> = body.split(',').map(str::trim).collect();

        match fields.as_slice() {
            [manufacturer, model, serial_number, firmware_revision] => Ok(InstrumentInfo {
                manufacturer: manufacturer.to_string(),
                model: model.to_string(),
                serial_number: serial_number.to_string(),
                firmware_revision: firmware_revision.to_string(),
            }),
            _ => Err(Error::UnexpectedResponse(s.to_string())),
        }
    }
}
