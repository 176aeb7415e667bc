/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! Fixed value sets the HDO accepts for enumerated settings.

use std::fmt;
use std::str::FromStr;

use crate::Error;

fn exact(allowed: &str, value: &str) -> bool {
    allowed == value
}

fn ignore_case(allowed: &str, value: &str) -> bool {
    allowed.eq_ignore_ascii_case(value)
}

/// Declares an enum whose variants map one to one to VBS string values.
///
/// `$matches` decides how user input is compared against the VBS string.
macro_rules! vbs_enum {
    {
        $(#[$meta:meta])*
        pub enum $name:ident matched by $matches:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    } => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every accepted value, in instrument order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The same values as the instrument spells them.
            pub const NAMES: &'static [&'static str] = &[ $( $text, )+ ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| $matches(v.as_str(), s))
                    .ok_or_else(|| Error::ValueNotSupported(s.to_string()))
            }
        }
    };
}

vbs_enum! {
    /// Enhanced resolution (ERES) filter setting of an analog channel.
    #[derive(Default)]
    pub enum NoiseFilter matched by exact {
        #[default]
        Off => "None",
        HalfBit => "0.5bits",
        OneBit => "1bits",
        OneAndHalfBits => "1.5bits",
        TwoBits => "2bits",
        TwoAndHalfBits => "2.5bits",
        ThreeBits => "3bits",
    }
}

vbs_enum! {
    /// Trigger kinds. The instrument is case-insensitive, the driver keeps them lowercase.
    #[derive(Default)]
    pub enum TriggerType matched by ignore_case {
        Dropout => "dropout",
        #[default]
        Edge => "edge",
        Glitch => "glitch",
        Interval => "interval",
        Logic => "logic",
        Qualified => "qualified",
        Runt => "runt",
        Serial => "serial",
        SlewRate => "slewrate",
        Tv => "tv",
        Width => "width",
    }
}

vbs_enum! {
    /// Trigger sources that are not acquisition channels.
    pub enum ExtTriggerSource matched by exact {
        Ext => "Ext",
        ExtDivide10 => "ExtDivide10",
        Line => "Line",
    }
}

vbs_enum! {
    /// Analog bandwidth limit. Only checked when the driver runs in strict mode.
    #[derive(Default)]
    pub enum BandwidthLimit matched by exact {
        #[default]
        Full => "Full",
        MHz20 => "20MHz",
        MHz200 => "200MHz",
    }
}

vbs_enum! {
    /// Waveform interpolation. Only checked when the driver runs in strict mode.
    #[derive(Default)]
    pub enum Interpolation matched by exact {
        #[default]
        Linear => "Linear",
        Sinxx => "Sinxx",
    }
}
