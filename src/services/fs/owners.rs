//! Owner and group name lookup against the system user/group databases.
//!
//! Ids without a registered name fall back to their decimal form.

use std::ffi::CStr;
use std::ptr;

const FALLBACK_BUF_LEN: usize = 1024;
const MAX_BUF_LEN: usize = 1 << 20;

pub fn user_name(uid: u32) -> String {
    lookup_user(uid).unwrap_or_else(|| uid.to_string())
}

pub fn group_name(gid: u32) -> String {
    lookup_group(gid).unwrap_or_else(|| gid.to_string())
}

fn initial_buf_len(key: libc::c_int) -> usize {
    // SAFETY: sysconf has no preconditions.
    let len = unsafe { libc::sysconf(key) };
    if len > 0 {
        len as usize
    } else {
        FALLBACK_BUF_LEN
    }
}

fn lookup_user(uid: libc::uid_t) -> Option<String> {
    let mut buf = vec![0 as libc::c_char; initial_buf_len(libc::_SC_GETPW_R_SIZE_MAX)];
    loop {
        // SAFETY: passwd is plain old data; getpwuid_r fills it in.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = ptr::null_mut();
        // SAFETY: every pointer refers to live storage of the advertised length.
        let rc = unsafe { libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result) };
        if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            tracing::debug!(uid, rc, "no user name registered");
            return None;
        }
        // SAFETY: pw_name points into `buf`, NUL-terminated by libc.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

fn lookup_group(gid: libc::gid_t) -> Option<String> {
    let mut buf = vec![0 as libc::c_char; initial_buf_len(libc::_SC_GETGR_R_SIZE_MAX)];
    loop {
        // SAFETY: group is plain old data; getgrgid_r fills it in.
        let mut grp: libc::group = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::group = ptr::null_mut();
        // SAFETY: every pointer refers to live storage of the advertised length.
        let rc = unsafe { libc::getgrgid_r(gid, &mut grp, buf.as_mut_ptr(), buf.len(), &mut result) };
        if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || grp.gr_name.is_null() {
            tracing::debug!(gid, rc, "no group name registered");
            return None;
        }
        // SAFETY: gr_name points into `buf`, NUL-terminated by libc.
        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}
