/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Prints the identity and the channel and trigger settings of an HDO.

use clap::Parser;
use env_logger::Env;

use lecroy_hdo::property::{ChannelProperty, PropertyPath, TriggerProperty};
use lecroy_hdo::transport::Transport;
use lecroy_hdo::usbtmc::{self, Instrument, Resource};
use lecroy_hdo::{Config, Detached, Hdo};

#[derive(Parser, Debug)]
#[command(name = "hdo-info", version, about = "Show the settings of a LeCroy HDO oscilloscope")]
struct Args {
    /// VISA resource, e.g. USB0::0x05FF::0x1023::INSTR
    #[arg(short, long, default_value = "USB0::0x05FF::0x1023::INSTR")]
    resource: String,

    /// Run against the simulated model instead of an instrument
    #[arg(short, long)]
    simulate: bool,

    /// Model to simulate
    #[arg(long, default_value = "HDO4034-MS", requires = "simulate")]
    model: String,

    /// List connected USBTMC instruments and exit
    #[arg(short, long)]
    list: bool,

    /// Describe every property path and exit
    #[arg(short, long)]
    describe: bool,

    /// Also validate bandwidth limit and interpolation values
    #[arg(long)]
    strict: bool,

    /// Log driver traffic
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn list() -> Result<(), Box<dyn std::error::Error>> {
    let instruments = usbtmc::instruments()?;
    if instruments.is_empty() {
        println!("no USBTMC instruments found");
    }
    for instr in instruments {
        let desc = instr.device.device_descriptor()?;
        let marker = if desc.vendor_id() == usbtmc::LECROY_VENDOR_ID {
            " (LeCroy)"
        } else {
            ""
        };
        println!(
            "USB{}::0x{:04X}::0x{:04X}::INSTR{}",
            instr.device.bus_number(),
            desc.vendor_id(),
            desc.product_id(),
            marker
        );
    }
    Ok(())
}

fn describe(strict: bool) {
    let channel = ChannelProperty::ALL
        .iter()
        .map(|p| (p.path(), p.doc(), p.allowed_values(strict)));
    let trigger = TriggerProperty::ALL
        .iter()
        .map(|p| (p.path(), p.doc(), p.allowed_values()));

    for (path, doc, allowed) in channel.chain(trigger) {
        println!("{}", path);
        println!("  {}", doc);
        if let Some(values) = allowed {
            println!("  one of: {}", values.join(", "));
        }
    }
}

fn show<T: Transport>(scope: &mut Hdo<T>) -> Result<(), Box<dyn std::error::Error>> {
    let identity = scope.identity();
    println!("{} {}", identity.description, identity.revision);

    let info = scope.instrument_info()?;
    println!(
        "{} {} serial {:?} firmware {:?}",
        info.manufacturer, info.model, info.serial_number, info.firmware_revision
    );

    let analog = scope.channels().analog().to_vec();
    for name in &analog {
        println!("{}", name);
        for property in &ChannelProperty::ALL {
            let value = scope.get(&PropertyPath::channel(name, *property))?;
            println!("  {:<16}{}", property.name(), value);
        }
    }

    let digital = scope.channels().digital().to_vec();
    for name in &digital {
        let label = scope.label(name)?;
        if !label.is_empty() {
            println!("{} label {:?}", name, label);
        }
    }

    println!("trigger");
    for property in &TriggerProperty::ALL {
        let value = scope.get(&PropertyPath::Trigger(*property))?;
        println!("  {:<16}{}", property.name(), value);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "lecroy_hdo=debug",
        _ => "lecroy_hdo=trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if args.list {
        return list();
    }

    if args.describe {
        describe(args.strict);
        return Ok(());
    }

    if args.simulate {
        let config = Config::for_model(&args.model).simulate(true).strict(args.strict);
        let mut scope = Hdo::new(Detached, config);
        return show(&mut scope);
    }

    let resource: Resource = args.resource.parse()?;
    let mut instrument = Instrument::from_resource(&resource)?;
    instrument.open()?;
    log::debug!("opened {:?}", instrument);

    let mut scope = Hdo::connect(instrument, Config::default().strict(args.strict))?;
    show(&mut scope)
}
