/* lecroy-hdo (c) by Nao Pross <np@0hm.ch>
 *
 *
 * lecroy-hdo is licensed under a
 * Creative Commons Attribution-ShareAlike 4.0 International License.
 *
 * You should have received a copy of the license along with this
 * work. If not, see <http://creativecommons.org/licenses/by-sa/4.0/>.
 */
//! USB Test and Measurement Class (USBTMC) transport

use std::num::Wrapping;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::transport::Transport;

const USBTMC_BINTERFACE_CLASS: u8 = 0xfe;
const USBTMC_BINTERFACE_SUBCLASS: u8 = 3;
const USB488_BINTERFACE_PROTOCOL: u8 = 1;

const HEADER_SIZE: usize = 12;
const WRITE_TRANSFER_SIZE: usize = 1024 * 1024;
const READ_TRANSFER_SIZE: usize = 64 * 1024;

/// bmTransferAttributes bits
const EOM: u8 = 0x01;
const TERM_CHAR_ENABLED: u8 = 0x02;

/// Teledyne LeCroy USB vendor id
pub const LECROY_VENDOR_ID: u16 = 0x05ff;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/* control values */

/// USBTMC bRequest Values
#[repr(u8)]
#[allow(dead_code)]
enum RequestType {
    InitiateAbortBulkOut = 1,
    CheckAbortBulkOutStatus = 2,
    InitiateAbortBunkIn = 3,
    CheckAbortBulkInStatus = 4,
    InitiateClear = 5,
    CheckClearStatus = 6,
    GetCapabilities = 7,
    IndicatorPulse = 64,
}

/// USBTMC Status values
#[repr(u8)]
#[allow(dead_code)]
enum Status {
    Success = 0x01,
    Pending = 0x02,
    Failed = 0x80,
    TransferNotInProgress = 0x81,
    SplitNotInProgress = 0x82,
    SplitInProgress = 0x83,
}

/* bulk values */

#[derive(Clone, Copy)]
enum Direction {
    In,
    Out,
}

#[derive(Clone, Copy)]
#[allow(dead_code)]
enum MsgId {
    DeviceDependent,
    VendorSpecific,
}

/* instruments */

/// Capabilities of the USBTMC Devices
#[derive(Clone, Debug)]
pub struct Capabilities {
    /* version number (in BCD) */
    bcd_usbtmc: u16,
    /* interface capabilities */
    /// The device has an indicator for identification purposes
    pub pulse: bool,
    /// The interface is talk-only if it is not capable of processing any Bulk-OUT USBTMC
    /// device dependent message data bytes.
    pub talk_only: bool,
    /// The interface is it is not capable of sending Bulk-IN USBTMC device dependent
    /// message data bytes
    pub listen_only: bool,
    /* device capabilities */
    /// The device supports ending a Bulk-IN transfer from this USBTMC interface when a
    /// byte matches a specified TermChar.
    pub term_char: bool,
}

impl Capabilities {
    /// USBTMC specification release the device implements, in BCD (0x0100 is 1.00)
    pub fn usbtmc_version(&self) -> u16 {
        self.bcd_usbtmc
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("error on low level USB")]
    Rusb(#[from] rusb::Error),
    #[error("device not found")]
    DeviceNotFound,
    #[error("not a usbtmc device")]
    NotUsbtmcDevice,
    #[error("no usb handle")]
    NoHandle,
    #[error("not connected")]
    NotConnected,
    #[error("request failed")]
    Request,
    #[error("device does not support the request type")]
    NotSupported,
    #[error("decoding error (utf-8)")]
    Decoding(#[from] std::string::FromUtf8Error),
    #[error("invalid resource string `{0}`")]
    InvalidResource(String),
    #[error("malformed bulk-in header")]
    BadHeader,
}

/// Address of a USBTMC instrument as written in VISA resource strings,
/// e.g. `USB0::0x05FF::0x1023::INSTR` or `USB0::0x05FF::0x1023::LCRY1234N5678::INSTR`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    pub vendor_id: u16,
    pub product_id: u16,
    pub serial: Option<String>,
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidResource(s.to_string());
        let parts: Vec<&str> = s.trim().split("::").collect();

        if parts.len() < 4 || parts.len() > 5 {
            return Err(invalid());
        }
        if !parts[0].to_ascii_uppercase().starts_with("USB")
            || !parts[parts.len() - 1].eq_ignore_ascii_case("INSTR")
        {
            return Err(invalid());
        }

        let parse_id = |id: &str| {
            let digits = id.trim_start_matches("0x").trim_start_matches("0X");
            u16::from_str_radix(digits, 16).map_err(|_| invalid())
        };

        Ok(Resource {
            vendor_id: parse_id(parts[1])?,
            product_id: parse_id(parts[2])?,
            serial: if parts.len() == 5 {
                Some(parts[3].to_string())
            } else {
                None
            },
        })
    }
}

/// Location of the USBTMC interface inside a device's descriptors
#[derive(Clone, Copy, Debug, Default)]
struct InterfaceInfo {
    config_num: u8,
    iface_num: u8,
    usb488: bool,
    ep_bulk_in: Option<u8>,
    ep_bulk_out: Option<u8>,
    ep_interrupt_in: Option<u8>,
}

/// Loops through the usb interfaces and returns the first that matches the
/// usbtmc class and subclass
fn find_interface<C: rusb::UsbContext>(
    device: &rusb::Device<C>,
) -> Result<Option<InterfaceInfo>, Error> {
    let desc = device.device_descriptor()?;

    for cfg_desc in (0..desc.num_configurations())
        .map(|num| device.config_descriptor(num))
        .filter_map(|cfg_desc| cfg_desc.ok())
    {
        for iface_desc in cfg_desc
            .interfaces()
            .map(|iface| iface.descriptors())
            .flatten()
        {
            if iface_desc.class_code() != USBTMC_BINTERFACE_CLASS
                || iface_desc.sub_class_code() != USBTMC_BINTERFACE_SUBCLASS
            {
                continue;
            }

            let mut info = InterfaceInfo {
                config_num: cfg_desc.number(),
                iface_num: iface_desc.interface_number(),
                usb488: iface_desc.protocol_code() == USB488_BINTERFACE_PROTOCOL,
                ..Default::default()
            };

            for ep_desc in iface_desc.endpoint_descriptors() {
                match (ep_desc.transfer_type(), ep_desc.direction()) {
                    (rusb::TransferType::Bulk, rusb::Direction::Out) => {
                        info.ep_bulk_out = Some(ep_desc.address())
                    }
                    (rusb::TransferType::Bulk, rusb::Direction::In) => {
                        info.ep_bulk_in = Some(ep_desc.address())
                    }
                    (rusb::TransferType::Interrupt, rusb::Direction::In) => {
                        info.ep_interrupt_in = Some(ep_desc.address())
                    }
                    _ => {}
                }
            }

            return Ok(Some(info));
        }
    }

    Ok(None)
}

/// Get a list of connected USBTMC instruments
pub fn instruments() -> Result<Vec<Instrument<rusb::GlobalContext>>, Error> {
    let devices = rusb::devices()?;

    let mut instruments = Vec::<Instrument<rusb::GlobalContext>>::new();

    for dev in devices.iter() {
        match find_interface(&dev) {
            Ok(Some(_)) => instruments.push(Instrument::new(dev)),
            Ok(None) => {}
            Err(e) => log::debug!("skipping usb device: {}", e),
        }
    }

    Ok(instruments)
}

/// Blocking USBTMC transport around a rusb Device
pub struct Instrument<C: rusb::UsbContext> {
    connected: bool,
    // rusb objects
    pub device: rusb::Device<C>,
    pub handle: Option<rusb::DeviceHandle<C>>,
    // usbtmc capabilites
    capabilities: Option<Capabilities>,
    // for linux kernel
    has_kernel_driver: bool,
    // addresses in the usb device
    interface: Option<InterfaceInfo>,
    // btag number to keep track of packet parts
    btag: Wrapping<u8>,
    timeout: Duration,
}

impl<C: rusb::UsbContext> Instrument<C> {
    /// Creates an Instrument from a rusb Device
    pub fn new(device: rusb::Device<C>) -> Instrument<C> {
        Instrument {
            connected: false,
            device,
            handle: None,
            capabilities: None,
            has_kernel_driver: false,
            interface: None,
            btag: Wrapping(0_u8),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Timeout applied to every USB transfer
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Opens the USBTMC interface of the device
    ///
    /// Uses the first interface that matches the usbtmc class and subclass,
    /// detaches the kernel driver if one is bound, and clears the device.
    pub fn open(&mut self) -> Result<bool, Error> {
        if self.connected {
            log::debug!("device already connected");
            return Ok(self.connected);
        }

        let info = find_interface(&self.device)?.ok_or(Error::NotUsbtmcDevice)?;
        if info.ep_bulk_out.is_none() || info.ep_bulk_in.is_none() {
            return Err(Error::NotUsbtmcDevice);
        }
        if info.usb488 && info.ep_interrupt_in.is_none() {
            log::warn!("usb488 interface without interrupt endpoint");
        }

        if self.handle.is_none() {
            self.handle = Some(self.device.open()?);
        }
        let handle = self.handle.as_mut().ok_or(Error::NoHandle)?;

        self.has_kernel_driver = match handle.kernel_driver_active(info.iface_num) {
            Ok(true) => {
                handle.detach_kernel_driver(info.iface_num)?;
                true
            }
            _ => false,
        };

        if handle.active_configuration() != Ok(info.config_num) {
            handle.set_active_configuration(info.config_num)?;
            log::debug!("set configuration to {}", info.config_num);
        }

        handle.claim_interface(info.iface_num)?;

        self.interface = Some(info);
        self.connected = true;

        self.clear()?;

        Ok(self.connected)
    }

    /// Closes the devices
    pub fn close(&mut self) {
        if !self.connected {
            return;
        }

        if let (Some(handle), Some(info)) = (&mut self.handle, &self.interface) {
            if let Err(e) = handle.release_interface(info.iface_num) {
                log::warn!("failed to release interface: {}", e);
            }

            if self.has_kernel_driver {
                if let Err(e) = handle.attach_kernel_driver(info.iface_num) {
                    log::warn!("failed to attach kernel driver: {}", e);
                }
            }
        }

        self.connected = false;
        self.interface = None;
    }

    fn connection(&self) -> Result<(&rusb::DeviceHandle<C>, InterfaceInfo), Error> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        let handle = self.handle.as_ref().ok_or(Error::NoHandle)?;
        let info = self.interface.ok_or(Error::NotConnected)?;
        Ok((handle, info))
    }

    fn next_btag(&mut self) -> u8 {
        // btag 0 is not allowed
        self.btag += Wrapping(1_u8);
        if self.btag.0 == 0 {
            self.btag = Wrapping(1_u8);
        }
        self.btag.0
    }

    fn class_request_in(
        &self,
        recipient: rusb::Recipient,
        request: RequestType,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> Result<(), Error> {
        let (handle, _) = self.connection()?;
        handle.read_control(
            rusb::request_type(rusb::Direction::In, rusb::RequestType::Class, recipient),
            request as u8,
            value,
            index,
            buf,
            self.timeout,
        )?;
        Ok(())
    }

    /// Sends a clear request and waits for it to complete
    pub fn clear(&mut self) -> Result<(), Error> {
        let (_, info) = self.connection()?;
        let index = u16::from(info.iface_num);

        let mut buf = [0u8; 1];
        self.class_request_in(
            rusb::Recipient::Interface,
            RequestType::InitiateClear,
            0x0000,
            index,
            &mut buf,
        )?;

        if buf[0] != Status::Success as u8 {
            return Err(Error::Request);
        }

        loop {
            let mut buf = [0u8; 2];
            self.class_request_in(
                rusb::Recipient::Interface,
                RequestType::CheckClearStatus,
                0x0000,
                index,
                &mut buf,
            )?;

            if buf[0] != Status::Pending as u8 {
                break;
            }

            std::thread::sleep(Duration::from_millis(100));
        }

        let ep_bulk_out = info.ep_bulk_out.ok_or(Error::NotUsbtmcDevice)?;
        self.handle
            .as_mut()
            .ok_or(Error::NoHandle)?
            .clear_halt(ep_bulk_out)?;

        Ok(())
    }

    /// Ask to the device with features are supported
    pub fn get_capabilities(&mut self) -> Result<Capabilities, Error> {
        let (_, info) = self.connection()?;

        let mut buf = [0u8; 0x18];
        self.class_request_in(
            rusb::Recipient::Interface,
            RequestType::GetCapabilities,
            0x0000,
            u16::from(info.iface_num),
            &mut buf,
        )?;

        if buf[0] != Status::Success as u8 {
            return Err(Error::Request);
        }

        let capabilities = Capabilities {
            bcd_usbtmc: u16::from_le_bytes([buf[2], buf[3]]),
            pulse: (buf[4] & 4) != 0,
            talk_only: (buf[4] & 2) != 0,
            listen_only: (buf[4] & 1) != 0,
            term_char: (buf[5] & 1) != 0,
        };

        self.capabilities = Some(capabilities.clone());
        Ok(capabilities)
    }

    /// Blinks the identification indicator, if the device has one
    pub fn pulse(&mut self) -> Result<(), Error> {
        let can_pulse = match &self.capabilities {
            Some(c) => c.pulse,
            None => self.get_capabilities()?.pulse,
        };

        if !can_pulse {
            return Err(Error::NotSupported);
        }

        let (_, info) = self.connection()?;
        let mut buf = [0u8; 1];
        self.class_request_in(
            rusb::Recipient::Interface,
            RequestType::IndicatorPulse,
            0x0000,
            u16::from(info.iface_num),
            &mut buf,
        )?;

        if buf[0] != Status::Success as u8 {
            return Err(Error::Request);
        }

        Ok(())
    }

    /// Write a string to the instrument
    pub fn write(&mut self, message: &str) -> Result<usize, Error> {
        self.write_raw(message.as_bytes())
    }

    /// Write binary data to the instrument, returns the number of payload bytes sent
    pub fn write_raw(&mut self, data: &[u8]) -> Result<usize, Error> {
        let (_, info) = self.connection()?;
        let endpoint = info.ep_bulk_out.ok_or(Error::NotUsbtmcDevice)?;

        let chunks: Vec<&[u8]> = if data.is_empty() {
            vec![data]
        } else {
            data.chunks(WRITE_TRANSFER_SIZE).collect()
        };

        let mut sent_bytes = 0;
        for (i, chunk) in chunks.iter().enumerate() {
            let is_last = i + 1 == chunks.len();
            let btag = self.next_btag();
            let header = make_bulk_header(
                MsgId::DeviceDependent,
                Direction::Out,
                btag,
                chunk.len() as u32,
                if is_last { EOM } else { 0 },
                0,
            );

            // payload is padded to a multiple of 4 bytes
            let pad_size = (4 - (chunk.len() % 4)) % 4;
            let mut packet = Vec::with_capacity(HEADER_SIZE + chunk.len() + pad_size);
            packet.extend_from_slice(&header);
            packet.extend_from_slice(chunk);
            packet.resize(HEADER_SIZE + chunk.len() + pad_size, 0);

            let (handle, _) = self.connection()?;
            if let Err(e) = handle.write_bulk(endpoint, &packet, self.timeout) {
                log::warn!("failed to send chunk during bulk out: {}", e);
                self.abort_bulk_out(btag)?;
                return Err(Error::Rusb(e));
            }
            sent_bytes += chunk.len();
        }

        Ok(sent_bytes)
    }

    /// Abort a bulk-out operation
    fn abort_bulk_out(&mut self, btag: u8) -> Result<(), Error> {
        let (_, info) = self.connection()?;
        let endpoint = info.ep_bulk_out.ok_or(Error::NotUsbtmcDevice)?;

        let mut buf = [0u8; 2];
        self.class_request_in(
            rusb::Recipient::Endpoint,
            RequestType::InitiateAbortBulkOut,
            u16::from(btag),
            u16::from(endpoint),
            &mut buf,
        )?;

        if buf[0] != Status::Success as u8 {
            log::warn!("abort bulk out returned status {:#x}", buf[0]);
        }

        Ok(())
    }

    /// Read binary data from the device and decode into an utf-8 string
    pub fn read(&mut self) -> Result<String, Error> {
        let data = self.read_raw()?;
        Ok(String::from_utf8(data)?)
    }

    /// Read binary data from the device
    ///
    /// Requests device dependent messages until the device marks the end of
    /// the message.
    pub fn read_raw(&mut self) -> Result<Vec<u8>, Error> {
        let (_, info) = self.connection()?;
        let ep_in = info.ep_bulk_in.ok_or(Error::NotUsbtmcDevice)?;
        let ep_out = info.ep_bulk_out.ok_or(Error::NotUsbtmcDevice)?;

        let mut data = Vec::new();
        let mut buf = vec![0u8; HEADER_SIZE + READ_TRANSFER_SIZE];

        loop {
            let btag = self.next_btag();
            let request = make_bulk_header(
                MsgId::DeviceDependent,
                Direction::In,
                btag,
                READ_TRANSFER_SIZE as u32,
                0,
                0,
            );

            let (handle, _) = self.connection()?;
            handle.write_bulk(ep_out, &request, self.timeout)?;

            let received = handle.read_bulk(ep_in, &mut buf, self.timeout)?;
            let (size, eom) = parse_bulk_in_header(&buf[..received], btag)?;

            let end = (HEADER_SIZE + size).min(received);
            data.extend_from_slice(&buf[HEADER_SIZE..end]);

            // the device may split one transfer over several bulk reads
            let mut remaining = size - (end - HEADER_SIZE);
            while remaining > 0 {
                let n = handle.read_bulk(ep_in, &mut buf, self.timeout)?;
                if n == 0 {
                    return Err(Error::BadHeader);
                }
                let take = n.min(remaining);
                data.extend_from_slice(&buf[..take]);
                remaining -= take;
            }

            if eom {
                break;
            }
        }

        Ok(data)
    }
}

impl Instrument<rusb::GlobalContext> {
    /// Creates an Instrument from the idVendor and idProduct numbers
    pub fn from_vid_pid(
        id_vendor: u16,
        id_product: u16,
    ) -> Result<Self, Error> {
        let handle =
            rusb::open_device_with_vid_pid(id_vendor, id_product).ok_or(Error::DeviceNotFound)?;

        let mut instr = Instrument::new(handle.device());
        instr.handle = Some(handle);
        Ok(instr)
    }

    /// Creates an Instrument from a VISA style resource string
    ///
    /// When the resource names a serial number, only the device reporting
    /// that serial number matches.
    pub fn from_resource(resource: &Resource) -> Result<Self, Error> {
        for dev in rusb::devices()?.iter() {
            let desc = dev.device_descriptor()?;
            if desc.vendor_id() != resource.vendor_id || desc.product_id() != resource.product_id
            {
                continue;
            }

            let serial = match &resource.serial {
                Some(serial) => serial,
                None => return Ok(Instrument::new(dev)),
            };

            let handle = match dev.open() {
                Ok(handle) => handle,
                Err(e) => {
                    log::debug!("failed to open {:04x}:{:04x}: {}", desc.vendor_id(), desc.product_id(), e);
                    continue;
                }
            };
            if handle.read_serial_number_string_ascii(&desc).ok().as_ref() == Some(serial) {
                let mut instr = Instrument::new(dev);
                instr.handle = Some(handle);
                return Ok(instr);
            }
        }

        Err(Error::DeviceNotFound)
    }
}

impl<C: rusb::UsbContext> Drop for Instrument<C> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Commands are newline terminated, replies have their terminator trimmed
impl<C: rusb::UsbContext> Transport for Instrument<C> {
    type Error = Error;

    fn write(&mut self, command: &str) -> Result<(), Error> {
        log::trace!("usbtmc write: {}", command);
        self.write_raw(format!("{}\n", command).as_bytes())?;
        Ok(())
    }

    fn ask(&mut self, command: &str) -> Result<String, Error> {
        Transport::write(self, command)?;
        let reply = self.read()?;
        log::trace!("usbtmc read: {}", reply.trim_end());
        Ok(reply.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
    }
}

/// helper function to create bulk headers
fn make_bulk_header(
    msgid: MsgId,
    direction: Direction,
    btag: u8,
    transfer_size: u32,
    transfer_attributes: u8,
    term_char: u8,
) -> [u8; HEADER_SIZE] {
    // USBTMC 1.0 table 2
    let msgid_nr: u8 = match msgid {
        MsgId::DeviceDependent => match direction {
            Direction::Out => 1,
            Direction::In => 2,
        },
        MsgId::VendorSpecific => match direction {
            Direction::Out => 126,
            Direction::In => 127,
        },
    };

    let ts_bytes = transfer_size.to_le_bytes();
    [
        // USBTMC 1.0 table 1
        msgid_nr,
        btag,
        !btag,
        0x00,
        // USBTMC 1.0 tables 3 and 4
        // size of the transfer, without header
        ts_bytes[0],
        ts_bytes[1],
        ts_bytes[2],
        ts_bytes[3],
        transfer_attributes,
        // only meaningful with TERM_CHAR_ENABLED
        if transfer_attributes & TERM_CHAR_ENABLED != 0 {
            term_char
        } else {
            0x00
        },
        // reserved, must be zeroes
        0x00,
        0x00,
    ]
}

/// Returns the transfer size and whether the message ends with this transfer
fn parse_bulk_in_header(buf: &[u8], btag: u8) -> Result<(usize, bool), Error> {
    if buf.len() < HEADER_SIZE || buf[0] != 2 || buf[1] != btag || buf[2] != !btag {
        return Err(Error::BadHeader);
    }

    let size = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]) as usize;
    Ok((size, buf[8] & EOM != 0))
}

impl<C: rusb::UsbContext> std::fmt::Debug for Instrument<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Instrument")
            .field("connected", &self.connected)
            .field("capabilities", &self.capabilities)
            .field("has_kernel_driver", &self.has_kernel_driver)
            .field("interface", &self.interface)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_header_layout() {
        let header = make_bulk_header(MsgId::DeviceDependent, Direction::Out, 7, 0x0102_0304, EOM, 0);
        assert_eq!(
            header,
            [1, 7, !7u8, 0, 0x04, 0x03, 0x02, 0x01, 0x01, 0, 0, 0]
        );
    }

    #[test]
    fn in_request_header_term_char() {
        let header = make_bulk_header(
            MsgId::DeviceDependent,
            Direction::In,
            1,
            64,
            TERM_CHAR_ENABLED,
            b'\n',
        );
        assert_eq!(header[0], 2);
        assert_eq!(header[8], TERM_CHAR_ENABLED);
        assert_eq!(header[9], b'\n');

        let header = make_bulk_header(MsgId::DeviceDependent, Direction::In, 1, 64, 0, b'\n');
        assert_eq!(header[9], 0);
    }

    #[test]
    fn vendor_specific_msgid() {
        let header = make_bulk_header(MsgId::VendorSpecific, Direction::In, 3, 0, 0, 0);
        assert_eq!(header[0], 127);
    }

    #[test]
    fn bulk_in_header() {
        let mut buf = vec![2, 9, !9u8, 0, 5, 0, 0, 0, EOM, 0, 0, 0];
        buf.extend_from_slice(b"hello");
        assert_eq!(parse_bulk_in_header(&buf, 9).unwrap(), (5, true));

        buf[8] = 0;
        assert_eq!(parse_bulk_in_header(&buf, 9).unwrap(), (5, false));

        assert!(matches!(parse_bulk_in_header(&buf, 10), Err(Error::BadHeader)));
        assert!(matches!(parse_bulk_in_header(&buf[..6], 9), Err(Error::BadHeader)));
    }

    #[test]
    fn resource_without_serial() {
        let res: Resource = "USB0::0x05FF::0x1023::INSTR".parse().unwrap();
        assert_eq!(
            res,
            Resource {
                vendor_id: LECROY_VENDOR_ID,
                product_id: 0x1023,
                serial: None,
            }
        );
    }

    #[test]
    fn resource_with_serial() {
        let res: Resource = "usb0::05ff::1023::LCRY4501N12345::instr".parse().unwrap();
        assert_eq!(res.product_id, 0x1023);
        assert_eq!(res.serial.as_deref(), Some("LCRY4501N12345"));
    }

    #[test]
    fn resource_rejects_other_interfaces() {
        assert!("TCPIP::17.43.69.164::INSTR".parse::<Resource>().is_err());
        assert!("USB0::0x05FF::INSTR".parse::<Resource>().is_err());
        assert!("USB0::0xZZZZ::0x1023::INSTR".parse::<Resource>().is_err());
    }
}
