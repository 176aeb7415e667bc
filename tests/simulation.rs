/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */

use std::convert::Infallible;

use lecroy_hdo::{
    ChannelProperty, Config, Detached, Error, Hdo, NoiseFilter, PropertyPath, Transport,
    TriggerProperty, Value,
};

/// Accepts everything and answers every query with the same reply
#[derive(Default)]
struct Recorder {
    sent: Vec<String>,
    reply: String,
}

impl Transport for Recorder {
    type Error = Infallible;

    fn write(&mut self, command: &str) -> Result<(), Infallible> {
        self.sent.push(command.to_string());
        Ok(())
    }

    fn ask(&mut self, command: &str) -> Result<String, Infallible> {
        self.sent.push(command.to_string());
        Ok(self.reply.clone())
    }
}

fn path(text: &str) -> PropertyPath {
    text.parse().unwrap()
}

#[test]
fn noise_filter_set_then_get_on_every_channel() {
    let mut scope = Hdo::new(Detached, Config::simulated());
    let channels = scope.channels().analog().to_vec();
    assert_eq!(channels.len(), 4);

    for name in &channels {
        for level in NoiseFilter::NAMES {
            let nf = PropertyPath::channel(name, ChannelProperty::NoiseFilter);
            scope.set(&nf, *level).unwrap();
            assert_eq!(scope.get(&nf).unwrap(), Value::from(*level));
        }
    }
}

#[test]
fn bogus_noise_filter_sends_nothing() {
    let mut recorder = Recorder::default();
    let mut scope = Hdo::new(&mut recorder, Config::default());
    let channels = scope.channels().analog().to_vec();

    for name in &channels {
        let nf = PropertyPath::channel(name, ChannelProperty::NoiseFilter);
        assert!(matches!(
            scope.set(&nf, "bogus"),
            Err(Error::ValueNotSupported(_))
        ));
    }
    drop(scope);
    assert!(recorder.sent.is_empty());
}

#[test]
fn trigger_source_names() {
    let mut scope = Hdo::new(Detached, Config::simulated());
    let source = PropertyPath::Trigger(TriggerProperty::Source);

    scope.set(&source, "Ext").unwrap();
    assert_eq!(scope.get(&source).unwrap(), Value::from("Ext"));
    assert!(matches!(
        scope.set(&source, "Unknown123"),
        Err(Error::UnknownPhysicalName(_))
    ));
    assert_eq!(scope.get(&source).unwrap(), Value::from("Ext"));
}

#[test]
fn trigger_type_cached_lowercase() {
    let mut scope = Hdo::new(Detached, Config::simulated());
    let ty = path("trigger.type");
    scope.set(&ty, "EDGE").unwrap();
    assert_eq!(scope.get(&ty).unwrap(), Value::from("edge"));
}

#[test]
fn noise_filter_default_then_set() {
    let mut scope = Hdo::new(Detached, Config::simulated());
    let nf = path("channels[C1].noise_filter");
    assert_eq!(scope.get(&nf).unwrap(), Value::from("None"));
    scope.set(&nf, "2bits").unwrap();
    assert_eq!(scope.get(&nf).unwrap(), Value::from("2bits"));
}

#[test]
fn label_issues_text_then_visibility() {
    let mut recorder = Recorder::default();
    let mut scope = Hdo::new(&mut recorder, Config::default());
    scope.set(&path("channels[C1].label"), "Vout").unwrap();

    scope.set_simulate(true);
    assert_eq!(scope.label("C1").unwrap(), "Vout");
    drop(scope);

    assert_eq!(
        recorder.sent,
        vec![
            "VBS 'app.Acquisition.C1.LabelsText = \"Vout\"'",
            "VBS 'app.Acquisition.C1.ViewLabels = True'",
        ]
    );
}

#[test]
fn probe_skew_goes_out_in_scientific_notation() {
    let mut recorder = Recorder {
        reply: "5.500000e-08\n".to_string(),
        ..Default::default()
    };
    let mut scope = Hdo::new(&mut recorder, Config::default());

    scope.set_probe_skew("C2", 5.5e-8).unwrap();
    let skew = scope.probe_skew("C2").unwrap();
    assert!((skew - 5.5e-8).abs() < 1e-20);
    drop(scope);

    assert_eq!(
        recorder.sent,
        vec![
            "VBS 'app.Acquisition.C2.Deskew = \"5.500000e-08\"'",
            "VBS? 'Return=app.Acquisition.C2.Deskew'",
        ]
    );
}

#[test]
fn detached_driver_fails_once_simulation_is_off() {
    let mut scope = Hdo::new(Detached, Config::simulated());
    scope.set_invert("C1", true).unwrap();
    scope.set_simulate(false);
    assert!(matches!(scope.invert("C1"), Err(Error::Transport(_))));
}
