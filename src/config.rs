/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Driver configuration, fixed when the driver is constructed.

/// HDO4000 series models the driver supports. The `-MS` (mixed signal)
/// variants add 16 digital channels.
pub const SUPPORTED_MODELS: &[&str] = &[
    "HDO4022", "HDO4024", "HDO4032", "HDO4034", "HDO4054", "HDO4104",
    "HDO4022-MS", "HDO4024-MS", "HDO4032-MS", "HDO4034-MS", "HDO4054-MS", "HDO4104-MS",
];

const DIGITAL_CHANNELS_MS: usize = 16;

/// Analog and digital channel counts of an HDO model.
///
/// The last digit of the model number is the analog channel count, `-MS`
/// models have 16 digital channels and the others none.
pub fn channel_counts(model: &str) -> Option<(usize, usize)> {
    let model = model.trim().to_ascii_uppercase();
    let (base, mixed_signal) = match model.strip_suffix("-MS") {
        Some(base) => (base, true),
        None => (model.as_str(), false),
    };

    let number = base.strip_prefix("HDO")?;
    if number.len() != 4 || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let analog = number[3..].parse::<usize>().ok().filter(|&count| count > 0)?;

    Some((analog, if mixed_signal { DIGITAL_CHANNELS_MS } else { 0 }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skip all instrument I/O and serve every read from the cache.
    pub simulate: bool,
    /// Make labels visible on screen whenever a label or its position is set.
    pub display_labels: bool,
    /// Also validate bandwidth limit and interpolation values, which the
    /// instrument otherwise receives unchecked.
    pub strict: bool,
    pub analog_channels: usize,
    pub digital_channels: usize,
    /// Model reported in simulation mode.
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            simulate: false,
            display_labels: true,
            strict: false,
            analog_channels: 4,
            digital_channels: DIGITAL_CHANNELS_MS,
            model: "HDO4034-MS".to_string(),
        }
    }
}

impl Config {
    pub fn simulated() -> Self {
        Config {
            simulate: true,
            ..Default::default()
        }
    }

    /// Configuration for a model name such as `HDO4024` or `HDO4034-MS`.
    /// Unrecognised names keep the default channel counts.
    pub fn for_model(model: &str) -> Self {
        let model = model.trim().to_ascii_uppercase();
        let mut config = Config::default();
        match channel_counts(&model) {
            Some((analog, digital)) => {
                config.analog_channels = analog;
                config.digital_channels = digital;
            }
            None => log::warn!("unknown model {}, assuming default channel counts", model),
        }
        config.model = model;
        config
    }

    pub fn simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    pub fn display_labels(mut self, display_labels: bool) -> Self {
        self.display_labels = display_labels;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
