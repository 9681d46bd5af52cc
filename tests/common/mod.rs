use std::path::Path;

use flate2::{write::GzEncoder, Compression};

/// Write a gzip-compressed tar archive holding the given (name, contents)
/// entries, the same shape as an upstream release tarball.
pub fn write_archive(path: &Path, entries: &[(&str, &str)]) {
    let file = fs_err::File::create(path).unwrap();
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, contents) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, contents.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}
