// crates/engine/src/identity.rs
use std::collections::HashMap;
use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::ptr;

const INITIAL_BUF_LEN: usize = 1024;

/// Numeric-id-to-name resolution, abstracted so that rendering can be tested
/// against a fixed mapping instead of the host's identity database.
///
/// `None` is the defined fallback for an unresolvable id, never an error.
pub trait IdentitySource {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Production lookup through the system identity database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentities;

impl IdentitySource for SystemIdentities {
    fn user_name(&self, uid: u32) -> Option<String> {
        let mut buf = vec![0_u8; INITIAL_BUF_LEN];
        let mut pwd: MaybeUninit<libc::passwd> = MaybeUninit::uninit();
        let mut found: *mut libc::passwd = ptr::null_mut();

        loop {
            let rc = unsafe {
                libc::getpwuid_r(
                    uid,
                    pwd.as_mut_ptr(),
                    buf.as_mut_ptr().cast(),
                    buf.len(),
                    &mut found,
                )
            };
            match rc {
                0 if !found.is_null() => {
                    // SAFETY: getpwuid_r reported success, so pw_name points
                    // at a NUL-terminated string held alive by buf.
                    let name = unsafe { CStr::from_ptr((*found).pw_name) };
                    return Some(name.to_string_lossy().into_owned());
                }
                libc::ERANGE => {
                    let doubled = buf.len() * 2;
                    buf.resize(doubled, 0);
                }
                _ => return None,
            }
        }
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        let mut buf = vec![0_u8; INITIAL_BUF_LEN];
        let mut grp: MaybeUninit<libc::group> = MaybeUninit::uninit();
        let mut found: *mut libc::group = ptr::null_mut();

        loop {
            let rc = unsafe {
                libc::getgrgid_r(
                    gid,
                    grp.as_mut_ptr(),
                    buf.as_mut_ptr().cast(),
                    buf.len(),
                    &mut found,
                )
            };
            match rc {
                0 if !found.is_null() => {
                    // SAFETY: getgrgid_r reported success, so gr_name points
                    // at a NUL-terminated string held alive by buf.
                    let name = unsafe { CStr::from_ptr((*found).gr_name) };
                    return Some(name.to_string_lossy().into_owned());
                }
                libc::ERANGE => {
                    let doubled = buf.len() * 2;
                    buf.resize(doubled, 0);
                }
                _ => return None,
            }
        }
    }
}

/// Fixed in-memory mapping. Lets tests pin down owner and group names without
/// depending on the host's user database.
#[derive(Debug, Clone, Default)]
pub struct FixedIdentities {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl FixedIdentities {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_user(mut self, uid: u32, name: &str) -> Self {
        self.users.insert(uid, name.to_owned());
        self
    }

    #[must_use]
    pub fn with_group(mut self, gid: u32, name: &str) -> Self {
        self.groups.insert(gid, name.to_owned());
        self
    }
}

impl IdentitySource for FixedIdentities {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.users.get(&uid).cloned()
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.groups.get(&gid).cloned()
    }
}
