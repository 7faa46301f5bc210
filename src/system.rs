use crate::error::{FormatError, FormatResult};
#[cfg(any(target_os = "linux", target_os = "macos"))]
use log::debug;

/// Seconds since the host booted.
pub fn get_system_uptime() -> FormatResult<u64> {
    #[cfg(target_os = "linux")]
    {
        let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };
        if unsafe { libc::sysinfo(&mut info) } != 0 {
            return Err(std::io::Error::last_os_error().into());
        }
        debug!("sysinfo uptime {}s", info.uptime);
        u64::try_from(info.uptime).map_err(|_| FormatError::NegativeSeconds(info.uptime as i64))
    }
    #[cfg(target_os = "macos")]
    {
        let mut mib = [libc::CTL_KERN, libc::KERN_BOOTTIME];
        let mut boot: libc::timeval = unsafe { std::mem::zeroed() };
        let mut size = std::mem::size_of::<libc::timeval>();
        let rc = unsafe {
            libc::sysctl(
                mib.as_mut_ptr(),
                mib.len() as libc::c_uint,
                &mut boot as *mut libc::timeval as *mut libc::c_void,
                &mut size,
                std::ptr::null_mut(),
                0,
            )
        };
        if rc != 0 {
            return Err(std::io::Error::last_os_error().into());
        }
        let elapsed = chrono::Utc::now().timestamp() - boot.tv_sec as i64;
        debug!("kern.boottime {} -> uptime {}s", boot.tv_sec, elapsed);
        u64::try_from(elapsed).map_err(|_| FormatError::NegativeSeconds(elapsed))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        Err(FormatError::Unsupported("reading system uptime"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    fn test_system_uptime_is_readable() {
        let first = get_system_uptime().unwrap();
        let second = get_system_uptime().unwrap();
        assert!(second >= first);
    }
}
