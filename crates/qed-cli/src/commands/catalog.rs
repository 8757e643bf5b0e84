use crate::cli::CatalogArgs;
use crate::error::Result;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(args: CatalogArgs) -> Result<()> {
    let patterns = args.catalog.patterns();
    info!("Printing {} pattern(s) of the '{}' catalog.", patterns.len(), args.catalog);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_patterns(&mut out, patterns)?;
    out.flush()?;
    Ok(())
}

fn write_patterns(out: &mut impl Write, patterns: &[&str]) -> io::Result<()> {
    for pattern in patterns {
        writeln!(out, "{}", pattern)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qedpp::core::catalog::Catalog;

    #[test]
    fn patterns_are_written_one_per_line() {
        let mut out = Vec::new();
        write_patterns(&mut out, Catalog::Acceptors.patterns()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "[oH0;X2]");
    }

    #[test]
    fn aliphatic_ring_catalog_is_a_single_line() {
        let mut out = Vec::new();
        write_patterns(&mut out, Catalog::AliphaticRings.patterns()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[$([A;R][!a])]\n");
    }
}
