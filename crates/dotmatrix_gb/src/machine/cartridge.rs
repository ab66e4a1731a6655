const OFFSET_TITLE: usize = 0x0134;
const OFFSET_TYPE: usize = 0x0147;
const OFFSET_ROM_SIZE: usize = 0x0148;
const OFFSET_RAM_SIZE: usize = 0x0149;
const HEADER_END: usize = 0x0150;

/// Why a ROM image was rejected at load time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("ROM image of {0} bytes is smaller than the 0x150-byte cartridge header")]
    TooSmall(usize),
    #[error("unsupported cartridge type {0:#04x}; bank-switched (MBC) cartridges need an external mapper")]
    UnsupportedType(u8),
}

/// An inserted cartridge: the owned ROM image plus its parsed header.
///
/// Only unbanked cartridges are accepted; the first 32 KiB map directly
/// into 0x0000-0x7FFF and CPU writes into that range are ignored.
pub(crate) struct Cartridge {
    rom: Vec<u8>,
    title: String,
    cart_type: u8,
    rom_size_code: u8,
    ram_size_code: u8,
}

impl Cartridge {
    pub(crate) fn from_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_END {
            return Err(CartridgeError::TooSmall(data.len()));
        }

        let cart_type = data[OFFSET_TYPE];
        match cart_type {
            // ROM only, optionally with RAM (+battery).
            0x00 | 0x08 | 0x09 => {}
            other => return Err(CartridgeError::UnsupportedType(other)),
        }

        let title_bytes = &data[OFFSET_TITLE..OFFSET_TITLE + 16];
        let title = String::from_utf8_lossy(title_bytes)
            .trim_end_matches(['\0', ' '])
            .to_string();

        Ok(Self {
            rom: data.to_vec(),
            title,
            cart_type,
            rom_size_code: data[OFFSET_ROM_SIZE],
            ram_size_code: data[OFFSET_RAM_SIZE],
        })
    }

    /// Read from the 0x0000-0x7FFF window. Addresses past the end of the
    /// image float high.
    #[inline]
    pub(crate) fn rom_read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn cart_type(&self) -> u8 {
        self.cart_type
    }

    pub(crate) fn rom_size_code(&self) -> u8 {
        self.rom_size_code
    }

    pub(crate) fn ram_size_code(&self) -> u8 {
        self.ram_size_code
    }
}
