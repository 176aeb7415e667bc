/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Channel names and index resolution.

use crate::property::ChannelRef;
use crate::{Error, Result};

/// Which channel list a name is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `C1..Cn` only
    Analog,
    /// Analog channels followed by the digital `D0..Dm`
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channels {
    names: Vec<String>,
    analog_count: usize,
}

impl Channels {
    pub fn new(analog: usize, digital: usize) -> Self {
        let names = (1..=analog)
            .map(|n| format!("C{}", n))
            .chain((0..digital).map(|n| format!("D{}", n)))
            .collect();
        Channels {
            names,
            analog_count: analog,
        }
    }

    pub fn analog(&self) -> &[String] {
        &self.names[..self.analog_count]
    }

    pub fn digital(&self) -> &[String] {
        &self.names[self.analog_count..]
    }

    pub fn all(&self) -> &[String] {
        &self.names
    }

    pub fn list(&self, kind: Kind) -> &[String] {
        match kind {
            Kind::Analog => self.analog(),
            Kind::Any => self.all(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Index of `channel` in the `kind` list. Since analog channels come
    /// first, an analog index is also valid in the full list.
    pub fn resolve(&self, channel: &ChannelRef, kind: Kind) -> Result<usize> {
        let list = self.list(kind);
        match channel {
            ChannelRef::Name(name) => list
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| Error::UnknownPhysicalName(name.clone())),
            ChannelRef::Index(idx) if *idx < list.len() => Ok(*idx),
            ChannelRef::Index(idx) => Err(Error::ChannelIndexOutOfRange {
                idx: *idx,
                count: list.len(),
            }),
        }
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let channels = Channels::new(4, 16);
        assert_eq!(channels.analog(), ["C1", "C2", "C3", "C4"]);
        assert_eq!(channels.digital().len(), 16);
        assert_eq!(channels.digital()[0], "D0");
        assert_eq!(channels.all()[4], "D0");
        assert_eq!(channels.all().len(), 20);
    }

    #[test]
    fn resolve_by_name() {
        let channels = Channels::new(4, 16);
        assert_eq!(channels.resolve(&"C3".into(), Kind::Analog).unwrap(), 2);
        assert_eq!(channels.resolve(&"D15".into(), Kind::Any).unwrap(), 19);
        assert!(matches!(
            channels.resolve(&"D0".into(), Kind::Analog),
            Err(Error::UnknownPhysicalName(name)) if name == "D0"
        ));
        assert!(matches!(
            channels.resolve(&"c1".into(), Kind::Any),
            Err(Error::UnknownPhysicalName(_))
        ));
    }

    #[test]
    fn resolve_by_index() {
        let channels = Channels::new(2, 0);
        assert_eq!(channels.resolve(&1usize.into(), Kind::Analog).unwrap(), 1);
        assert!(matches!(
            channels.resolve(&2usize.into(), Kind::Any),
            Err(Error::ChannelIndexOutOfRange { idx: 2, count: 2 })
        ));
    }
}
