//! Windows process attachment

use std::ffi::c_void;
use std::mem::size_of;

use tracing::debug;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::Debug::ReadProcessMemory;
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, MODULEENTRY32W, Module32FirstW, PROCESSENTRY32W, Process32FirstW,
    Process32NextW, TH32CS_SNAPMODULE, TH32CS_SNAPMODULE32, TH32CS_SNAPPROCESS,
};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ,
};

use super::ReadMemory;
use crate::error::{Error, Result};

/// Read-only handle to the game process
pub struct ProcessHandle {
    pub pid: u32,
    pub base_address: u64,
    pub module_size: u32,
    handle: HANDLE,
}

impl ProcessHandle {
    /// Find the game by executable name and open it
    pub fn find_and_open(name: &str) -> Result<Self> {
        let pid = find_pid(name)?;
        Self::open(pid)
    }

    pub fn open(pid: u32) -> Result<Self> {
        let handle = unsafe { OpenProcess(PROCESS_VM_READ | PROCESS_QUERY_INFORMATION, false, pid) }
            .map_err(|e| Error::ProcessOpenFailed(format!("pid {}: {}", pid, e)))?;

        let (base_address, module_size) = match main_module(pid) {
            Ok(module) => module,
            Err(e) => {
                unsafe {
                    let _ = CloseHandle(handle);
                }
                return Err(e);
            }
        };

        debug!(
            "Opened process {} (base: {:#x}, size: {:#x})",
            pid, base_address, module_size
        );

        Ok(Self {
            pid,
            base_address,
            module_size,
            handle,
        })
    }
}

impl ReadMemory for ProcessHandle {
    fn base_address(&self) -> u64 {
        self.base_address
    }

    fn read_bytes(&self, address: u64, len: usize) -> Vec<u8> {
        if address == 0 || len == 0 {
            return Vec::new();
        }

        let mut buffer = vec![0u8; len];
        let mut read = 0usize;
        let result = unsafe {
            ReadProcessMemory(
                self.handle,
                address as *const c_void,
                buffer.as_mut_ptr() as *mut c_void,
                len,
                Some(&mut read),
            )
        };

        // a partial copy still reports how many bytes landed
        if result.is_err() && read == 0 {
            return Vec::new();
        }
        buffer.truncate(read);
        buffer
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}

fn find_pid(name: &str) -> Result<u32> {
    let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
        .map_err(|e| Error::ProcessNotFound(format!("{}: {}", name, e)))?;

    let mut entry = PROCESSENTRY32W {
        dwSize: size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };

    let mut found = None;
    let mut ok = unsafe { Process32FirstW(snapshot, &mut entry) }.is_ok();
    while ok {
        if wide_to_string(&entry.szExeFile).eq_ignore_ascii_case(name) {
            found = Some(entry.th32ProcessID);
            break;
        }
        ok = unsafe { Process32NextW(snapshot, &mut entry) }.is_ok();
    }

    unsafe {
        let _ = CloseHandle(snapshot);
    }

    found.ok_or_else(|| Error::ProcessNotFound(name.to_string()))
}

fn main_module(pid: u32) -> Result<(u64, u32)> {
    let snapshot =
        unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPMODULE | TH32CS_SNAPMODULE32, pid) }
            .map_err(|e| Error::ProcessOpenFailed(format!("module snapshot: {}", e)))?;

    let mut entry = MODULEENTRY32W {
        dwSize: size_of::<MODULEENTRY32W>() as u32,
        ..Default::default()
    };

    let result = unsafe { Module32FirstW(snapshot, &mut entry) };
    unsafe {
        let _ = CloseHandle(snapshot);
    }

    result.map_err(|e| Error::ProcessOpenFailed(format!("main module: {}", e)))?;
    Ok((entry.modBaseAddr as u64, entry.modBaseSize))
}
