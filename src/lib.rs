/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Driver for Teledyne LeCroy HDO4000 oscilloscopes.
//!
//! Channel and trigger settings are read and written through the scope's
//! VBS automation interface, with every value cached in the driver. The
//! driver talks through any [`Transport`]; [`usbtmc::Instrument`] is the
//! USB one.
//!
//! ```no_run
//! use lecroy_hdo::{usbtmc, Config, Hdo};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resource: usbtmc::Resource = "USB0::0x05FF::0x1023::INSTR".parse()?;
//! let mut instrument = usbtmc::Instrument::from_resource(&resource)?;
//! instrument.open()?;
//!
//! let mut scope = Hdo::connect(instrument, Config::default())?;
//! scope.set_noise_filter("C1", "2bits")?;
//! scope.set_label("C2", "Vout")?;
//! println!("trigger on {}", scope.trigger_source()?);
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod attributes;
pub mod cache;
pub mod channel;
pub mod config;
pub mod identity;
pub mod property;
pub mod scope;
pub mod transport;
pub mod usbtmc;
pub mod vbs;

pub use attributes::{BandwidthLimit, ExtTriggerSource, Interpolation, NoiseFilter, TriggerType};
pub use config::Config;
pub use identity::{Identity, InstrumentInfo, IDENTITY};
pub use property::{ChannelProperty, ChannelRef, PropertyPath, TriggerProperty, Value};
pub use scope::Hdo;
pub use transport::{Detached, Transport};

#[derive(Error, Debug)]
pub enum Error {
    #[error("value not supported: {0}")]
    ValueNotSupported(String),
    #[error("unknown physical name: {0}")]
    UnknownPhysicalName(String),
    #[error("channel index {idx} out of range, {count} channels")]
    ChannelIndexOutOfRange { idx: usize, count: usize },
    #[error("unexpected response from instrument: {0:?}")]
    UnexpectedResponse(String),
    #[error("invalid property path: {0}")]
    InvalidPath(String),
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn transport<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
