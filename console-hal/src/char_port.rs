// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

pub mod log;

#[derive(Clone)]
/// `CharPort` is a structure representing a write-only memory mapped
/// character port. Storing a byte at the port address transmits one
/// character to the console.
pub struct CharPort {
    /// `payload_addr` is a mutable pointer to the address of the data payload.
    payload_addr: *mut u8,
}

impl CharPort {
    /// Create a new [`CharPort`] instance given a base address.
    ///
    /// # Safety
    ///
    /// The `base_addr` pointer MUST BE a valid pointer that is backed
    /// by a memory mapped character device.
    pub const unsafe fn new(base_addr: *const ()) -> CharPort {
        CharPort {
            payload_addr: (base_addr as *const u8).cast_mut(),
        }
    }

    /// The `send` function sends the given byte to the console. The device
    /// accepts every store, so there is no status to poll and no failure
    /// path.
    pub fn send(&self, data: u8) {
        unsafe {
            self.payload_addr.write_volatile(data);
        }
    }
}

impl ufmt::uWrite for CharPort {
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }

    type Error = ();
}

impl core::fmt::Write for CharPort {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }
}
