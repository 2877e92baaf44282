//! Sampling of closed form curves and their XML export.

use std::f64::consts::PI;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::Error;

/// Name of the file written by [`Curve::save`].
pub const RESULT_FILE: &str = "result.xml";

/// `y = -cos(x) cos(π) exp(-(x - π)²)`.
#[inline]
pub fn variant_function(x: f64) -> f64 {
    -f64::cos(x) * f64::cos(PI) * f64::exp(-(x - PI) * (x - PI))
}

/// A function sampled on a regular grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    /// Samples `f` at `start, start + step, ...` up to but excluding `stop`.
    pub fn sample<F: Fn(f64) -> f64>(start: f64, stop: f64, step: f64, f: F) -> Self {
        let n = ((stop - start) / step).ceil();
        let n = if n > 0.0 { n as usize } else { 0 };
        let x: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
        let y = x.iter().map(|&x| f(x)).collect();

        Self { x, y }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Writes the samples as an indented UTF-8 XML document.
    ///
    /// The root `data` element holds an `xdata` collection of `x` elements and a
    /// `ydata` collection of `y` elements.
    pub fn write_xml<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut writer = Writer::new_with_indent(writer, b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new("data")))?;
        write_collection(&mut writer, "xdata", "x", &self.x)?;
        write_collection(&mut writer, "ydata", "y", &self.y)?;
        writer.write_event(Event::End(BytesEnd::new("data")))?;

        let mut inner = writer.into_inner();
        inner.write_all(b"\n")?;
        inner.flush()?;
        Ok(())
    }

    /// Recreates `dir` and writes the curve to `dir/result.xml`.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, Error> {
        let dir = dir.as_ref();
        recreate_dir(dir)?;

        let path = dir.join(RESULT_FILE);
        self.write_xml(BufWriter::new(fs::File::create(&path)?))?;
        Ok(path)
    }
}

fn write_collection<W: Write>(
    writer: &mut Writer<W>,
    collection: &str,
    element: &str,
    values: &[f64],
) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new(collection)))?;
    for value in values {
        writer.write_event(Event::Start(BytesStart::new(element)))?;
        writer.write_event(Event::Text(BytesText::new(&format!("{:?}", value))))?;
        writer.write_event(Event::End(BytesEnd::new(element)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(collection)))?;
    Ok(())
}

/// Deletes `dir` with everything in it, if it exists, and creates it empty.
pub fn recreate_dir<P: AsRef<Path>>(dir: P) -> Result<(), Error> {
    let dir = dir.as_ref();
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
