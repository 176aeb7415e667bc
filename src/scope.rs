/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! The HDO driver.
//!
//! [`Hdo`] keeps the last known value of every attribute. A read asks the
//! instrument and refreshes the cache, a write sends the command and updates
//! the cache only once the transport accepted it. In simulation mode no I/O
//! happens at all: writes go straight to the cache and reads return it.

use crate::attributes::{BandwidthLimit, ExtTriggerSource, Interpolation, NoiseFilter, TriggerType};
use crate::cache::{ChannelCache, TriggerCache};
use crate::channel::{Channels, Kind};
use crate::config::{channel_counts, Config};
use crate::identity::{Identity, InstrumentInfo, IDENTITY};
use crate::property::{ChannelProperty, ChannelRef};
use crate::transport::Transport;
use crate::vbs;
use crate::{Error, Result};

pub struct Hdo<T: Transport> {
    transport: T,
    config: Config,
    channels: Channels,
    cache: ChannelCache,
    trigger: TriggerCache,
}

impl<T: Transport> Hdo<T> {
    /// Creates a driver for the channel layout in `config`. Nothing is sent
    /// to the instrument.
    pub fn new(transport: T, config: Config) -> Self {
        let channels = Channels::new(config.analog_channels, config.digital_channels);
        let cache = ChannelCache::new(channels.analog().len(), channels.all().len());
        let default_source = channels
            .analog()
            .first()
            .map(String::as_str)
            .unwrap_or_else(|| ExtTriggerSource::Ext.as_str());
        let trigger = TriggerCache::new(default_source);

        log::debug!(
            "{} driver: {} analog, {} digital channels{}",
            config.model,
            channels.analog().len(),
            channels.digital().len(),
            if config.simulate { ", simulated" } else { "" }
        );

        Hdo {
            transport,
            config,
            channels,
            cache,
            trigger,
        }
    }

    /// Creates a driver sized for the instrument behind `transport`, as
    /// reported by `*IDN?`. In simulation mode `config` is used unchanged.
    pub fn connect(mut transport: T, mut config: Config) -> Result<Self> {
        if !config.simulate {
            let reply = transport.ask(vbs::IDENTIFY).map_err(Error::transport)?;
            let info: InstrumentInfo = reply.parse()?;
            log::info!(
                "connected to {} {}, serial {}, firmware {}",
                info.manufacturer,
                info.model,
                info.serial_number,
                info.firmware_revision
            );

            match channel_counts(&info.model) {
                Some((analog, digital)) => {
                    config.analog_channels = analog;
                    config.digital_channels = digital;
                }
                None => log::warn!(
                    "unsupported model {}, keeping {} analog and {} digital channels",
                    info.model,
                    config.analog_channels,
                    config.digital_channels
                ),
            }
            config.model = info.model;
        }

        Ok(Hdo::new(transport, config))
    }

    pub fn identity(&self) -> &'static Identity {
        &IDENTITY
    }

    /// Manufacturer, model, serial and firmware of the connected instrument.
    pub fn instrument_info(&mut self) -> Result<InstrumentInfo> {
        if self.config.simulate {
            return Ok(InstrumentInfo {
                manufacturer: IDENTITY.vendor.to_string(),
                model: self.config.model.clone(),
                ..Default::default()
            });
        }
        self.ask(vbs::IDENTIFY)?.parse()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn channels(&self) -> &Channels {
        &self.channels
    }

    pub fn simulate(&self) -> bool {
        self.config.simulate
    }

    /// Switches simulation on or off. The cache is kept, so values written
    /// while simulating are what reads return until the instrument is asked.
    pub fn set_simulate(&mut self, simulate: bool) {
        log::debug!("simulation {}", if simulate { "on" } else { "off" });
        self.config.simulate = simulate;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Runs the instrument's automatic setup. Cached values are not
    /// refreshed, read them again afterwards.
    pub fn auto_setup(&mut self) -> Result<()> {
        if self.config.simulate {
            return Ok(());
        }
        self.write(vbs::AUTO_SETUP)
    }

    fn write(&mut self, command: &str) -> Result<()> {
        log::trace!("write: {}", command);
        self.transport.write(command).map_err(Error::transport)
    }

    fn ask(&mut self, command: &str) -> Result<String> {
        log::trace!("ask: {}", command);
        let reply = self.transport.ask(command).map_err(Error::transport)?;
        log::trace!("reply: {}", reply.trim_end());
        Ok(reply)
    }

    fn resolve(&self, channel: impl Into<ChannelRef>, property: ChannelProperty) -> Result<usize> {
        let kind = if property.on_all_channels() {
            Kind::Any
        } else {
            Kind::Analog
        };
        self.channels.resolve(&channel.into(), kind)
    }

    /// Asks the instrument for a channel property. `None` in simulation mode.
    fn read_channel(&mut self, index: usize, property: ChannelProperty) -> Result<Option<String>> {
        if self.config.simulate {
            log::trace!("cached {} of {}", property, self.channels.name(index));
            return Ok(None);
        }
        let command = vbs::query(&vbs::channel_path(self.channels.name(index), property));
        self.ask(&command).map(Some)
    }

    fn write_channel(&mut self, index: usize, property: ChannelProperty, argument: &str) -> Result<()> {
        if self.config.simulate {
            return Ok(());
        }
        let command = vbs::assign(&vbs::channel_path(self.channels.name(index), property), argument);
        self.write(&command)
    }

    fn show_labels(&mut self, index: usize) -> Result<()> {
        if self.config.simulate || !self.config.display_labels {
            return Ok(());
        }
        let command = vbs::view_labels(self.channels.name(index));
        self.write(&command)
    }

    pub fn label(&mut self, channel: impl Into<ChannelRef>) -> Result<String> {
        let index = self.resolve(channel, ChannelProperty::Label)?;
        if let Some(reply) = self.read_channel(index, ChannelProperty::Label)? {
            self.cache.label[index] = vbs::parse_text(&reply);
        }
        Ok(self.cache.label[index].clone())
    }

    /// Sets the label text, then makes labels visible if `display_labels`
    /// is configured. Double quotes are escaped, single quotes are not
    /// supported.
    pub fn set_label(&mut self, channel: impl Into<ChannelRef>, text: &str) -> Result<()> {
        let index = self.resolve(channel, ChannelProperty::Label)?;
        self.write_channel(index, ChannelProperty::Label, &vbs::text(text)?)?;
        self.cache.label[index] = text.to_string();
        self.show_labels(index)
    }

    pub fn label_position(&mut self, channel: impl Into<ChannelRef>) -> Result<f64> {
        let index = self.resolve(channel, ChannelProperty::LabelPosition)?;
        if let Some(reply) = self.read_channel(index, ChannelProperty::LabelPosition)? {
            self.cache.label_position[index] = vbs::parse_float(&reply)?;
        }
        Ok(self.cache.label_position[index])
    }

    /// Position in seconds along the horizontal axis.
    pub fn set_label_position(&mut self, channel: impl Into<ChannelRef>, seconds: f64) -> Result<()> {
        let index = self.resolve(channel, ChannelProperty::LabelPosition)?;
        let argument = vbs::quoted(&vbs::scientific(seconds));
        self.write_channel(index, ChannelProperty::LabelPosition, &argument)?;
        self.cache.label_position[index] = seconds;
        self.show_labels(index)
    }

    pub fn bw_limit(&mut self, channel: impl Into<ChannelRef>) -> Result<String> {
        let index = self.resolve(channel, ChannelProperty::BwLimit)?;
        if let Some(reply) = self.read_channel(index, ChannelProperty::BwLimit)? {
            let value = vbs::parse_text(&reply);
            if self.config.strict {
                vbs::parse_enum::<BandwidthLimit>(&value)?;
            }
            self.cache.bw_limit[index] = value;
        }
        Ok(self.cache.bw_limit[index].clone())
    }

    pub fn set_bw_limit(&mut self, channel: impl Into<ChannelRef>, limit: &str) -> Result<()> {
        let index = self.resolve(channel, ChannelProperty::BwLimit)?;
        if self.config.strict {
            limit.parse::<BandwidthLimit>()?;
        }
        self.write_channel(index, ChannelProperty::BwLimit, &vbs::text(limit)?)?;
        self.cache.bw_limit[index] = limit.to_string();
        Ok(())
    }

    pub fn invert(&mut self, channel: impl Into<ChannelRef>) -> Result<bool> {
        let index = self.resolve(channel, ChannelProperty::Invert)?;
        if let Some(reply) = self.read_channel(index, ChannelProperty::Invert)? {
            self.cache.invert[index] = vbs::parse_bool(&reply)?;
        }
        Ok(self.cache.invert[index])
    }

    pub fn set_invert(&mut self, channel: impl Into<ChannelRef>, invert: bool) -> Result<()> {
        let index = self.resolve(channel, ChannelProperty::Invert)?;
        self.write_channel(index, ChannelProperty::Invert, vbs::boolean(invert))?;
        self.cache.invert[index] = invert;
        Ok(())
    }

    pub fn noise_filter(&mut self, channel: impl Into<ChannelRef>) -> Result<NoiseFilter> {
        let index = self.resolve(channel, ChannelProperty::NoiseFilter)?;
        if let Some(reply) = self.read_channel(index, ChannelProperty::NoiseFilter)? {
            self.cache.noise_filter[index] = vbs::parse_enum(&reply)?;
        }
        Ok(self.cache.noise_filter[index])
    }

    /// `filter` must be one of [`NoiseFilter::NAMES`], matched exactly.
    pub fn set_noise_filter(&mut self, channel: impl Into<ChannelRef>, filter: &str) -> Result<()> {
        let index = self.resolve(channel, ChannelProperty::NoiseFilter)?;
        let filter: NoiseFilter = filter.parse()?;
        self.write_channel(index, ChannelProperty::NoiseFilter, &vbs::quoted(filter.as_str()))?;
        self.cache.noise_filter[index] = filter;
        Ok(())
    }

    pub fn interpolation(&mut self, channel: impl Into<ChannelRef>) -> Result<String> {
        let index = self.resolve(channel, ChannelProperty::Interpolation)?;
        if let Some(reply) = self.read_channel(index, ChannelProperty::Interpolation)? {
            let value = vbs::parse_text(&reply);
            if self.config.strict {
                vbs::parse_enum::<Interpolation>(&value)?;
            }
            self.cache.interpolation[index] = value;
        }
        Ok(self.cache.interpolation[index].clone())
    }

    pub fn set_interpolation(&mut self, channel: impl Into<ChannelRef>, kind: &str) -> Result<()> {
        let index = self.resolve(channel, ChannelProperty::Interpolation)?;
        if self.config.strict {
            kind.parse::<Interpolation>()?;
        }
        self.write_channel(index, ChannelProperty::Interpolation, &vbs::text(kind)?)?;
        self.cache.interpolation[index] = kind.to_string();
        Ok(())
    }

    pub fn probe_skew(&mut self, channel: impl Into<ChannelRef>) -> Result<f64> {
        let index = self.resolve(channel, ChannelProperty::ProbeSkew)?;
        if let Some(reply) = self.read_channel(index, ChannelProperty::ProbeSkew)? {
            self.cache.probe_skew[index] = vbs::parse_float(&reply)?;
        }
        Ok(self.cache.probe_skew[index])
    }

    /// Deskew in seconds.
    pub fn set_probe_skew(&mut self, channel: impl Into<ChannelRef>, seconds: f64) -> Result<()> {
        let index = self.resolve(channel, ChannelProperty::ProbeSkew)?;
        let argument = vbs::quoted(&vbs::scientific(seconds));
        self.write_channel(index, ChannelProperty::ProbeSkew, &argument)?;
        self.cache.probe_skew[index] = seconds;
        Ok(())
    }

    pub fn trigger_source(&mut self) -> Result<String> {
        if !self.config.simulate {
            let reply = self.ask(&vbs::query(vbs::TRIGGER_SOURCE))?;
            self.trigger.source = vbs::parse_text(&reply);
        }
        Ok(self.trigger.source.clone())
    }

    /// `source` is any channel name, analog or digital, or one of the
    /// external inputs in [`ExtTriggerSource`].
    pub fn set_trigger_source(&mut self, source: &str) -> Result<()> {
        if !self.channels.contains(source) && source.parse::<ExtTriggerSource>().is_err() {
            return Err(Error::UnknownPhysicalName(source.to_string()));
        }
        if !self.config.simulate {
            self.write(&vbs::assign(vbs::TRIGGER_SOURCE, &vbs::quoted(source)))?;
        }
        self.trigger.source = source.to_string();
        Ok(())
    }

    pub fn trigger_type(&mut self) -> Result<TriggerType> {
        if !self.config.simulate {
            let reply = self.ask(&vbs::query(vbs::TRIGGER_TYPE))?;
            self.trigger.kind = vbs::parse_enum(&reply)?;
        }
        Ok(self.trigger.kind)
    }

    /// Case-insensitive, the instrument always receives the lowercase name.
    pub fn set_trigger_type(&mut self, kind: &str) -> Result<()> {
        let kind: TriggerType = kind.parse()?;
        if !self.config.simulate {
            self.write(&vbs::assign(vbs::TRIGGER_TYPE, &vbs::quoted(kind.as_str())))?;
        }
        self.trigger.kind = kind;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::loopback::Loopback;

    fn online(replies: &[&str]) -> Hdo<Loopback> {
        Hdo::new(Loopback::with_replies(replies), Config::default())
    }

    fn simulated() -> Hdo<Loopback> {
        Hdo::new(Loopback::new(), Config::simulated())
    }

    #[test]
    fn construction_defaults() {
        let mut scope = simulated();
        assert_eq!(scope.label("C1").unwrap(), "");
        assert_eq!(scope.label("D15").unwrap(), "");
        assert_eq!(scope.noise_filter("C4").unwrap(), NoiseFilter::Off);
        assert_eq!(scope.bw_limit("C1").unwrap(), "Full");
        assert_eq!(scope.interpolation("C1").unwrap(), "Linear");
        assert!(!scope.invert("C2").unwrap());
        assert_eq!(scope.probe_skew("C3").unwrap(), 0.0);
        assert_eq!(scope.trigger_source().unwrap(), "C1");
        assert_eq!(scope.trigger_type().unwrap(), TriggerType::Edge);
    }

    #[test]
    fn noise_filter_commands() {
        let mut scope = online(&["1.5bits\n"]);
        scope.set_noise_filter("C1", "2bits").unwrap();
        assert_eq!(scope.noise_filter("C1").unwrap(), NoiseFilter::OneAndHalfBits);
        assert_eq!(
            scope.transport().sent,
            vec![
                "VBS 'app.Acquisition.C1.EnhanceResType = \"2bits\"'",
                "VBS? 'Return=app.Acquisition.C1.EnhanceResType'",
            ]
        );
    }

    #[test]
    fn bad_noise_filter_sends_nothing() {
        let mut scope = online(&[]);
        assert!(matches!(
            scope.set_noise_filter("C1", "4bits"),
            Err(Error::ValueNotSupported(v)) if v == "4bits"
        ));
        assert!(matches!(
            scope.set_noise_filter("C1", "2BITS"),
            Err(Error::ValueNotSupported(_))
        ));
        assert!(scope.transport().sent.is_empty());
    }

    #[test]
    fn label_shows_labels() {
        let mut scope = online(&[]);
        scope.set_label("C2", "Vout").unwrap();
        assert_eq!(
            scope.transport().sent,
            vec![
                "VBS 'app.Acquisition.C2.LabelsText = \"Vout\"'",
                "VBS 'app.Acquisition.C2.ViewLabels = True'",
            ]
        );
    }

    #[test]
    fn label_position_shows_labels() {
        let mut scope = online(&[]);
        scope.set_label_position("C1", 5.5e-8).unwrap();
        assert_eq!(
            scope.transport().sent,
            vec![
                "VBS 'app.Acquisition.C1.LabelsPosition = \"5.500000e-08\"'",
                "VBS 'app.Acquisition.C1.ViewLabels = True'",
            ]
        );
    }

    #[test]
    fn label_quotes_are_escaped() {
        let mut scope = online(&[]);
        scope.set_label("C1", "say \"x\"").unwrap();
        assert_eq!(
            scope.transport().sent[0],
            "VBS 'app.Acquisition.C1.LabelsText = \"say \"\"x\"\"\"'"
        );

        let mut scope = online(&[]);
        assert!(matches!(
            scope.set_label("C1", "it's"),
            Err(Error::ValueNotSupported(_))
        ));
        assert!(scope.transport().sent.is_empty());
        scope.set_simulate(true);
        assert_eq!(scope.label("C1").unwrap(), "");
    }

    #[test]
    fn digital_only_layout_triggers_externally() {
        let config = Config {
            analog_channels: 0,
            digital_channels: 16,
            ..Config::simulated()
        };
        let mut scope = Hdo::new(Loopback::new(), config);
        let source = scope.trigger_source().unwrap();
        assert_eq!(source, "Ext");
        scope.set_trigger_source(&source).unwrap();
    }

    #[test]
    fn label_without_display() {
        let mut scope = Hdo::new(Loopback::new(), Config::default().display_labels(false));
        scope.set_label_position("D0", 5.5e-8).unwrap();
        assert_eq!(
            scope.transport().sent,
            vec!["VBS 'app.Acquisition.D0.LabelsPosition = \"5.500000e-08\"'"]
        );
    }

    #[test]
    fn label_on_digital_channel() {
        let mut scope = online(&["  Bus clock \r\n"]);
        assert_eq!(scope.label("D3").unwrap(), "Bus clock");
        assert_eq!(
            scope.transport().sent,
            vec!["VBS? 'Return=app.Acquisition.D3.LabelsText'"]
        );
    }

    #[test]
    fn analog_only_properties_reject_digital() {
        let mut scope = simulated();
        assert!(matches!(
            scope.set_invert("D0", true),
            Err(Error::UnknownPhysicalName(name)) if name == "D0"
        ));
        assert!(matches!(
            scope.probe_skew(4usize),
            Err(Error::ChannelIndexOutOfRange { idx: 4, count: 4 })
        ));
        assert_eq!(scope.label(19usize).unwrap(), "");
        assert!(matches!(
            scope.label(20usize),
            Err(Error::ChannelIndexOutOfRange { idx: 20, count: 20 })
        ));
    }

    #[test]
    fn invert_is_a_bareword() {
        let mut scope = online(&["-1"]);
        scope.set_invert("C3", false).unwrap();
        assert!(scope.invert("C3").unwrap());
        assert_eq!(
            scope.transport().sent[0],
            "VBS 'app.Acquisition.C3.Invert = False'"
        );
    }

    #[test]
    fn probe_skew_formatting() {
        let mut scope = online(&["5.5E-08"]);
        scope.set_probe_skew(0usize, 5.5e-8).unwrap();
        assert_eq!(
            scope.transport().sent[0],
            "VBS 'app.Acquisition.C1.Deskew = \"5.500000e-08\"'"
        );
        assert_eq!(scope.probe_skew("C1").unwrap(), 5.5e-8);
    }

    #[test]
    fn label_position_reads_first_field() {
        let mut scope = online(&["1e-06|0|1"]);
        assert_eq!(scope.label_position("C1").unwrap(), 1e-6);
    }

    #[test]
    fn failed_write_keeps_cache() {
        let mut scope = Hdo::new(Loopback::failing(), Config::default());
        assert!(matches!(
            scope.set_label("C1", "Vin"),
            Err(Error::Transport(_))
        ));
        assert!(scope.set_noise_filter("C1", "3bits").is_err());
        assert!(scope.set_trigger_type("runt").is_err());

        // only the primary write went out, no ViewLabels
        assert_eq!(scope.transport().sent.len(), 3);

        scope.set_simulate(true);
        assert_eq!(scope.label("C1").unwrap(), "");
        assert_eq!(scope.noise_filter("C1").unwrap(), NoiseFilter::Off);
        assert_eq!(scope.trigger_type().unwrap(), TriggerType::Edge);
    }

    #[test]
    fn label_cached_when_only_visibility_fails() {
        let mut scope = Hdo::new(Loopback::failing_after(1), Config::default());
        assert!(scope.set_label("C1", "Vout").is_err());
        assert_eq!(scope.transport().sent.len(), 2);

        scope.set_simulate(true);
        assert_eq!(scope.label("C1").unwrap(), "Vout");
    }

    #[test]
    fn simulation_round_trip_without_io() {
        let mut scope = simulated();
        scope.set_label("C1", "Vin").unwrap();
        scope.set_label_position("C1", 2.0e-9).unwrap();
        scope.set_bw_limit("C2", "20MHz").unwrap();
        scope.set_invert("C3", true).unwrap();
        scope.set_interpolation("C4", "Sinxx").unwrap();
        scope.set_trigger_source("Ext").unwrap();

        assert_eq!(scope.label("C1").unwrap(), "Vin");
        assert_eq!(scope.label_position("C1").unwrap(), 2.0e-9);
        assert_eq!(scope.bw_limit("C2").unwrap(), "20MHz");
        assert!(scope.invert("C3").unwrap());
        assert_eq!(scope.interpolation("C4").unwrap(), "Sinxx");
        assert_eq!(scope.trigger_source().unwrap(), "Ext");
        assert!(scope.transport().sent.is_empty());
    }

    #[test]
    fn trigger_type_is_case_insensitive() {
        let mut scope = online(&["Glitch"]);
        scope.set_trigger_type("EDGE").unwrap();
        assert_eq!(
            scope.transport().sent[0],
            "VBS 'app.Acquisition.Trigger.Type = \"edge\"'"
        );
        assert_eq!(scope.trigger_type().unwrap(), TriggerType::Glitch);
        assert!(matches!(
            scope.set_trigger_type("pattern"),
            Err(Error::ValueNotSupported(_))
        ));
    }

    #[test]
    fn trigger_source_must_exist() {
        let mut scope = online(&[]);
        scope.set_trigger_source("D7").unwrap();
        scope.set_trigger_source("Line").unwrap();
        assert!(matches!(
            scope.set_trigger_source("C9"),
            Err(Error::UnknownPhysicalName(name)) if name == "C9"
        ));
        assert_eq!(
            scope.transport().sent,
            vec![
                "VBS 'app.Acquisition.Trigger.Source = \"D7\"'",
                "VBS 'app.Acquisition.Trigger.Source = \"Line\"'",
            ]
        );
    }

    #[test]
    fn unchecked_values_pass_through() {
        let mut scope = online(&["Sinc"]);
        scope.set_bw_limit("C1", "350MHz").unwrap();
        assert_eq!(scope.interpolation("C1").unwrap(), "Sinc");
        assert_eq!(
            scope.transport().sent[0],
            "VBS 'app.Acquisition.C1.BandwidthLimit = \"350MHz\"'"
        );
    }

    #[test]
    fn strict_mode_checks_everything() {
        let mut scope = Hdo::new(Loopback::with_replies(&["Sinc"]), Config::default().strict(true));
        assert!(matches!(
            scope.set_bw_limit("C1", "350MHz"),
            Err(Error::ValueNotSupported(_))
        ));
        assert!(scope.set_interpolation("C1", "Cubic").is_err());
        assert!(scope.transport().sent.is_empty());

        assert!(matches!(
            scope.interpolation("C1"),
            Err(Error::UnexpectedResponse(_))
        ));
        assert!(!scope.simulate());
        scope.set_simulate(true);
        assert_eq!(scope.interpolation("C1").unwrap(), "Linear");
    }

    #[test]
    fn bad_reply_is_unexpected() {
        let mut scope = online(&["maybe"]);
        assert!(matches!(scope.invert("C1"), Err(Error::UnexpectedResponse(_))));
    }

    #[test]
    fn connect_sizes_channels_from_idn() {
        let transport = Loopback::with_replies(&["LECROY,HDO4022,LCRY0001,8.5.1\n"]);
        let scope = Hdo::connect(transport, Config::default()).unwrap();
        assert_eq!(scope.channels().analog().len(), 2);
        assert!(scope.channels().digital().is_empty());
        assert_eq!(scope.config().model, "HDO4022");
        assert_eq!(scope.transport().sent, vec!["*IDN?"]);
    }

    #[test]
    fn connect_simulated_skips_idn() {
        let scope = Hdo::connect(Loopback::new(), Config::for_model("HDO4034-MS").simulate(true)).unwrap();
        assert_eq!(scope.channels().all().len(), 20);
        assert!(scope.transport().sent.is_empty());
    }

    #[test]
    fn instrument_info() {
        let mut scope = simulated();
        let info = scope.instrument_info().unwrap();
        assert_eq!(info.manufacturer, "LeCroy");
        assert_eq!(info.model, "HDO4034-MS");

        let mut scope = online(&["LECROY,HDO4104,LCRY1234,9.0.0"]);
        assert_eq!(scope.instrument_info().unwrap().serial_number, "LCRY1234");
        assert_eq!(scope.identity().vendor, "LeCroy");
    }

    #[test]
    fn auto_setup() {
        let mut scope = online(&[]);
        scope.auto_setup().unwrap();
        assert_eq!(scope.transport().sent, vec!["VBS 'app.AutoSetup'"]);

        let mut scope = simulated();
        scope.auto_setup().unwrap();
        assert!(scope.transport().sent.is_empty());
    }
}
