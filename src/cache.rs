/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Last known attribute values.
//!
//! Each attribute has its own typed array indexed by channel position. Label
//! arrays cover every channel, the rest only the analog ones. Arrays are
//! sized once and entries only ever get overwritten.

use crate::attributes::{BandwidthLimit, Interpolation, NoiseFilter, TriggerType};

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCache {
    pub label: Vec<String>,
    pub label_position: Vec<f64>,
    pub bw_limit: Vec<String>,
    pub invert: Vec<bool>,
    pub noise_filter: Vec<NoiseFilter>,
    pub interpolation: Vec<String>,
    pub probe_skew: Vec<f64>,
}

impl ChannelCache {
    pub fn new(analog: usize, all: usize) -> Self {
        ChannelCache {
            label: vec![String::new(); all],
            label_position: vec![0.0; all],
            bw_limit: vec![BandwidthLimit::default().to_string(); analog],
            invert: vec![false; analog],
            noise_filter: vec![NoiseFilter::default(); analog],
            interpolation: vec![Interpolation::default().to_string(); analog],
            probe_skew: vec![0.0; analog],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerCache {
    pub source: String,
    pub kind: TriggerType,
}

impl TriggerCache {
    pub fn new(default_source: &str) -> Self {
        TriggerCache {
            source: default_source.to_string(),
            kind: TriggerType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_per_channel_kind() {
        let cache = ChannelCache::new(4, 20);
        assert_eq!(cache.label.len(), 20);
        assert_eq!(cache.label_position.len(), 20);
        assert_eq!(cache.noise_filter.len(), 4);
        assert_eq!(cache.probe_skew.len(), 4);
    }

    #[test]
    fn construction_defaults() {
        let cache = ChannelCache::new(2, 2);
        assert_eq!(cache.bw_limit[0], "Full");
        assert_eq!(cache.interpolation[1], "Linear");
        assert_eq!(cache.noise_filter[0], NoiseFilter::Off);
        assert!(!cache.invert[0]);
        assert_eq!(TriggerCache::new("C1").kind, TriggerType::Edge);
    }
}
