/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Textual command transport the driver talks through.

use thiserror::Error;

/// A request/response channel to an instrument.
///
/// Commands are passed without terminator; implementations add and strip
/// whatever their wire format needs. Timeouts and retries are the
/// implementation's business, the driver passes its errors through as-is.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a command that produces no reply.
    fn write(&mut self, command: &str) -> Result<(), Self::Error>;

    /// Send a query and return the reply.
    fn ask(&mut self, command: &str) -> Result<String, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn write(&mut self, command: &str) -> Result<(), Self::Error> {
        (**self).write(command)
    }

    fn ask(&mut self, command: &str) -> Result<String, Self::Error> {
        (**self).ask(command)
    }
}

#[derive(Error, Debug)]
#[error("no instrument attached, cannot send `{0}`")]
pub struct DetachedError(pub String);

/// Transport for drivers that only ever run in simulation mode.
///
/// Every command fails, so turning simulation off on a detached driver
/// surfaces as a transport error instead of silently succeeding.
#[derive(Debug, Default, Clone, Copy)]
pub struct Detached;

impl Transport for Detached {
    type Error = DetachedError;

    fn write(&mut self, command: &str) -> Result<(), DetachedError> {
        Err(DetachedError(command.to_string()))
    }

    fn ask(&mut self, command: &str) -> Result<String, DetachedError> {
        Err(DetachedError(command.to_string()))
    }
}
