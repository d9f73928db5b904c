// libnfcemu/src/types.rs

use derive_more::Display;

use crate::constants::LLCP_SAP_LM;

/// Declares a `#[repr(u8)]` protocol enumeration together with its wire
/// conversions. `COUNT` is the number of values a command may name.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[repr(u8)]
        #[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// All values in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Number of values.
            pub const COUNT: usize = Self::ALL.len();

            /// Look up a value by its wire encoding.
            pub fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $( v if v == $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Wire encoding.
            pub fn as_u8(self) -> u8 {
                self as u8
            }
        }
    };
}

wire_enum! {
    /// NDEF Type Name Format. Value 7 is reserved and never accepted from a
    /// command line.
    #[derive(Default)]
    pub enum Tnf {
        #[default]
        Empty = 0x00,
        WellKnown = 0x01,
        MediaType = 0x02,
        AbsoluteUri = 0x03,
        External = 0x04,
        Unknown = 0x05,
        Unchanged = 0x06,
    }
}

wire_enum! {
    /// NCI RF protocol of a remote endpoint or interface.
    pub enum RfProtocol {
        Undetermined = 0x00,
        T1t = 0x01,
        T2t = 0x02,
        T3t = 0x03,
        IsoDep = 0x04,
        NfcDep = 0x05,
    }
}

wire_enum! {
    /// NCI RF technology and mode.
    pub enum RfTechMode {
        NfcAPassivePoll = 0x00,
        NfcBPassivePoll = 0x01,
        NfcFPassivePoll = 0x02,
        NfcAActivePoll = 0x03,
        NfcFActivePoll = 0x05,
        Iso15693Poll = 0x06,
        NfcAPassiveListen = 0x80,
        NfcBPassiveListen = 0x81,
        NfcFPassiveListen = 0x82,
        NfcAActiveListen = 0x83,
        NfcFActiveListen = 0x85,
        Iso15693Listen = 0x86,
    }
}

wire_enum! {
    /// NCI RF interface kind.
    pub enum RfInterfaceKind {
        NfceeDirect = 0x00,
        Frame = 0x01,
        IsoDep = 0x02,
        NfcDep = 0x03,
    }
}

wire_enum! {
    /// Notification type carried by RF_DISCOVER_NTF.
    pub enum DiscoverNtfType {
        /// Last notification
        Last = 0x00,
        /// Last notification, limit reached
        LastLimit = 0x01,
        /// More notifications to follow
        More = 0x02,
    }
}

wire_enum! {
    /// Deactivation type carried by RF_DEACTIVATE_NTF.
    pub enum DeactivationType {
        Idle = 0x00,
        Sleep = 0x01,
        SleepAf = 0x02,
        Discovery = 0x03,
    }
}

wire_enum! {
    /// Deactivation reason carried by RF_DEACTIVATE_NTF.
    pub enum DeactivationReason {
        DhRequest = 0x00,
        EndpointRequest = 0x01,
        RfLinkLoss = 0x02,
        BadAfi = 0x03,
    }
}

/// LLCP service access point as typed on a command line. `-1` selects the
/// remote endpoint's last negotiated SAP at dispatch time.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Sap {
    #[display(fmt = "-1")]
    Auto,
    #[display(fmt = "{}", _0)]
    Value(u8),
}

impl Sap {
    /// Resolve against the SAP last negotiated with the remote endpoint.
    pub fn resolve(self, last: u8) -> u8 {
        match self {
            Sap::Auto => last,
            Sap::Value(v) => v,
        }
    }
}

impl Default for Sap {
    fn default() -> Self {
        Sap::Value(LLCP_SAP_LM)
    }
}

/// RF interface selection for RF_INTF_ACTIVATED_NTF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RfSelect {
    /// Pick the interface matching the endpoint's protocol and mode.
    #[default]
    Auto,
    /// Use the interface at this table index.
    Index(usize),
}
