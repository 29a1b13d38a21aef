use std::io::{self, Read};
use std::time::Duration;

use serialport::SerialPort;

use crate::error::AppError;

const READ_TIMEOUT: Duration = Duration::from_millis(5);

/// Byte source for the poller. Implementations must not block waiting for
/// data: return an empty buffer when nothing has arrived.
pub trait InputChannel {
    fn name(&self) -> &str;
    fn read_available(&mut self) -> io::Result<Vec<u8>>;
}

/// Serial port opened once at startup and closed when dropped.
pub struct SerialDevice {
    name: String,
    port: Box<dyn SerialPort>,
}

impl SerialDevice {
    pub fn open(path: &str, baud_rate: u32) -> Result<Self, AppError> {
        let port = serialport::new(path, baud_rate)
            .timeout(READ_TIMEOUT)
            .open()?;
        tracing::info!(port = path, baud_rate, "serial device opened");
        Ok(Self {
            name: path.to_string(),
            port,
        })
    }
}

impl InputChannel for SerialDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_available(&mut self) -> io::Result<Vec<u8>> {
        let ready = self.port.bytes_to_read().map_err(io::Error::from)?;
        if ready == 0 {
            return Ok(Vec::new());
        }
        let mut buf = vec![0u8; ready as usize];
        match self.port.read(&mut buf) {
            Ok(read) => {
                buf.truncate(read);
                Ok(buf)
            }
            Err(err) if err.kind() == io::ErrorKind::TimedOut => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }
}

impl Drop for SerialDevice {
    fn drop(&mut self) {
        tracing::info!(port = %self.name, "serial device closed");
    }
}
