// crates/engine/src/render.rs
use crate::entry::{EntryInfo, FileKind};
use crate::identity::IdentitySource;
use crate::options::Options;
use chrono::{DateTime, Local};

const S_IRUSR: u32 = libc::S_IRUSR as u32;
const S_IWUSR: u32 = libc::S_IWUSR as u32;
const S_IXUSR: u32 = libc::S_IXUSR as u32;
const S_IRGRP: u32 = libc::S_IRGRP as u32;
const S_IWGRP: u32 = libc::S_IWGRP as u32;
const S_IXGRP: u32 = libc::S_IXGRP as u32;
const S_IROTH: u32 = libc::S_IROTH as u32;
const S_IWOTH: u32 = libc::S_IWOTH as u32;
const S_IXOTH: u32 = libc::S_IXOTH as u32;
const S_ISUID: u32 = libc::S_ISUID as u32;
const S_ISGID: u32 = libc::S_ISGID as u32;
const S_ISVTX: u32 = libc::S_ISVTX as u32;

/// Decodes raw mode bits into the fixed 10-character type-and-permission
/// string: type tag, then owner/group/other r/w/x triplets. The execute slot
/// of each triplet is overridden by the matching special bit: setuid/setgid
/// render `s` (execute set) or `S` (execute clear), sticky renders `t`/`T`.
pub fn mode_string(kind: FileKind, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(kind.symbol());
    push_triplet(&mut out, mode, S_IRUSR, S_IWUSR, S_IXUSR, S_ISUID, 's');
    push_triplet(&mut out, mode, S_IRGRP, S_IWGRP, S_IXGRP, S_ISGID, 's');
    push_triplet(&mut out, mode, S_IROTH, S_IWOTH, S_IXOTH, S_ISVTX, 't');
    out
}

fn push_triplet(out: &mut String, mode: u32, r: u32, w: u32, x: u32, special: u32, special_ch: char) {
    out.push(if mode & r != 0 { 'r' } else { '-' });
    out.push(if mode & w != 0 { 'w' } else { '-' });
    let exec = mode & x != 0;
    out.push(if mode & special != 0 {
        if exec {
            special_ch
        } else {
            special_ch.to_ascii_uppercase()
        }
    } else if exec {
        'x'
    } else {
        '-'
    });
}

/// Formats one output line for an entry. Never fails: an id with no name in
/// the identity source falls back to its numeric form.
pub fn render_entry(
    info: &EntryInfo,
    name: &str,
    options: &Options,
    identities: &dyn IdentitySource,
) -> String {
    if !options.long_format {
        return format!(" {name}");
    }

    let user = owner_field(identities.user_name(info.uid), info.uid);
    let group = owner_field(identities.group_name(info.gid), info.gid);
    let modified: DateTime<Local> = info.modified.into();

    format!(
        "{}  {:<3} {user:<8} {group:<8} {:>8} {} {name}",
        mode_string(info.kind, info.mode),
        info.nlink,
        info.size,
        modified.format("%a %b %e %H:%M:%S %Y"),
    )
}

// Resolved names are capped at 8 characters, matching the field width.
// Numeric fallbacks are not capped.
fn owner_field(name: Option<String>, id: u32) -> String {
    match name {
        Some(name) => name.chars().take(8).collect(),
        None => id.to_string(),
    }
}
