//! Python bindings for the lrc library using PyO3

use pyo3::exceptions::{PyIOError, PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PySlice, PySliceIndices};
use std::ops::Range;

use crate::file::Lrc as RustLrc;
use crate::types::lyric_line::LyricLine;
use crate::types::tag::{LrcTag, Tag, TimeTag};

pyo3::create_exception!(lrc, ParseError, PyValueError);

/// Lyric line as seen from Python: (minute, second, lyric)
type PyLyricLine = (i64, f64, String);

fn to_py_line(line: &LyricLine) -> PyLyricLine {
    (line.tag.minute(), line.tag.second(), line.lyric.clone())
}

fn from_py_line((minute, second, lyric): PyLyricLine) -> LyricLine {
    LyricLine::new(TimeTag::new(minute, second), lyric)
}

/// Index accepted by `__getitem__`/`__setitem__`/`__delitem__`
#[derive(FromPyObject)]
enum LyricIndex<'py> {
    Int(isize),
    Slice(Bound<'py, PySlice>),
}

/// Range of a step-1 slice; Python already clamped the bounds to the length.
fn contiguous_range(indices: &PySliceIndices) -> Range<usize> {
    indices.start.max(0) as usize..indices.stop.max(0) as usize
}

/// Positions selected by an extended slice, in slice order.
fn slice_positions(indices: &PySliceIndices) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut i = indices.start;
    while (indices.step > 0 && i < indices.stop) || (indices.step < 0 && i > indices.stop) {
        positions.push(i as usize);
        i += indices.step;
    }
    positions
}

/// LRC document with header tags and lyric lines
#[pyclass(name = "Lrc")]
#[derive(Clone)]
pub struct PyLrc {
    inner: RustLrc,
}

#[pymethods]
impl PyLrc {
    #[new]
    #[pyo3(signature = (lyrics=Vec::new(), tags=None))]
    fn new(lyrics: Vec<PyLyricLine>, tags: Option<Vec<(String, String)>>) -> Self {
        let lyrics = lyrics
            .into_iter()
            .map(from_py_line)
            .collect();
        let tags = tags
            .unwrap_or_default()
            .into_iter()
            .map(|(name, val)| Tag::new(name, val))
            .collect();
        PyLrc {
            inner: RustLrc::new(lyrics, tags),
        }
    }

    #[staticmethod]
    fn loads(content: &str) -> PyResult<Self> {
        match RustLrc::loads(content) {
            Ok(lrc) => Ok(PyLrc { inner: lrc }),
            Err(e) => Err(ParseError::new_err(format!("Failed to parse LRC: {}", e))),
        }
    }

    #[staticmethod]
    fn load(path: &str) -> PyResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PyIOError::new_err(format!("Failed to read file '{}': {}", path, e)))?;
        Self::loads(&content)
    }

    fn dumps(&self) -> String {
        self.inner.dumps()
    }

    fn save(&self, path: &str) -> PyResult<()> {
        std::fs::write(path, self.inner.dumps())
            .map_err(|e| PyIOError::new_err(format!("Failed to write file '{}': {}", path, e)))
    }

    #[getter]
    fn tags(&self) -> Vec<(String, String)> {
        self.inner.tags().iter().map(|tag| tag.to_tuple()).collect()
    }

    #[getter]
    fn lyrics(&self) -> Vec<PyLyricLine> {
        self.inner.iter().map(to_py_line).collect()
    }

    fn get_tag(&self, name: &str) -> Option<String> {
        self.inner.get_tag_value(name).map(|v| v.to_string())
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __getitem__<'py>(
        &self,
        py: Python<'py>,
        index: LyricIndex<'py>,
    ) -> PyResult<Bound<'py, PyAny>> {
        match index {
            LyricIndex::Int(index) => {
                let index = self.resolve_index(index)?;
                Ok(to_py_line(&self.inner[index]).into_pyobject(py)?.into_any())
            }
            LyricIndex::Slice(slice) => {
                let indices = slice.indices(self.inner.len() as isize)?;
                let lines: Vec<PyLyricLine> = if indices.step == 1 {
                    self.inner
                        .slice(contiguous_range(&indices))
                        .iter()
                        .map(to_py_line)
                        .collect()
                } else {
                    slice_positions(&indices)
                        .into_iter()
                        .map(|i| to_py_line(&self.inner[i]))
                        .collect()
                };
                Ok(lines.into_pyobject(py)?.into_any())
            }
        }
    }

    fn __setitem__(&mut self, index: LyricIndex<'_>, value: &Bound<'_, PyAny>) -> PyResult<()> {
        match index {
            LyricIndex::Int(index) => {
                let index = self.resolve_index(index)?;
                self.inner[index] = from_py_line(value.extract()?);
            }
            LyricIndex::Slice(slice) => {
                let indices = slice.indices(self.inner.len() as isize)?;
                let lines: Vec<LyricLine> = value
                    .extract::<Vec<PyLyricLine>>()?
                    .into_iter()
                    .map(from_py_line)
                    .collect();
                if indices.step == 1 {
                    self.inner.splice(contiguous_range(&indices), lines);
                } else {
                    let positions = slice_positions(&indices);
                    if positions.len() != lines.len() {
                        return Err(PyValueError::new_err(format!(
                            "attempt to assign sequence of size {} to extended slice of size {}",
                            lines.len(),
                            positions.len()
                        )));
                    }
                    for (position, line) in positions.into_iter().zip(lines) {
                        self.inner[position] = line;
                    }
                }
            }
        }
        Ok(())
    }

    fn __delitem__(&mut self, index: LyricIndex<'_>) -> PyResult<()> {
        match index {
            LyricIndex::Int(index) => {
                let index = self.resolve_index(index)?;
                self.inner.remove(index);
            }
            LyricIndex::Slice(slice) => {
                let indices = slice.indices(self.inner.len() as isize)?;
                if indices.step == 1 {
                    self.inner.delete_range(contiguous_range(&indices));
                } else {
                    let mut positions = slice_positions(&indices);
                    positions.sort_unstable_by(|a, b| b.cmp(a));
                    for position in positions {
                        self.inner.remove(position);
                    }
                }
            }
        }
        Ok(())
    }

    fn __str__(&self) -> String {
        self.inner.dumps()
    }

    fn __repr__(&self) -> String {
        format!(
            "Lrc(tags={}, lyrics={})",
            self.inner.tags().len(),
            self.inner.len()
        )
    }
}

impl PyLrc {
    fn resolve_index(&self, index: isize) -> PyResult<usize> {
        let len = self.inner.len() as isize;
        let resolved = if index < 0 { index + len } else { index };
        if resolved < 0 || resolved >= len {
            return Err(PyIndexError::new_err("lyric index out of range"));
        }
        Ok(resolved as usize)
    }
}

/// Parse LRC content
///
/// Raises ParseError if invalid.
#[pyfunction]
fn loads(content: &str) -> PyResult<PyLrc> {
    PyLrc::loads(content)
}

/// Load LRC from file
///
/// Raises IOError or ParseError.
#[pyfunction]
fn load(path: &str) -> PyResult<PyLrc> {
    PyLrc::load(path)
}

/// LRC lyric file parser and serializer
///
/// Example:
///     doc = lrc.loads("[ar:Someone]\\n[00:01.000]Hello\\n")
///     print(doc.tags, doc.lyrics)
///     print(doc.dumps())
#[pymodule]
fn lrc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLrc>()?;
    m.add_function(wrap_pyfunction!(loads, m)?)?;
    m.add_function(wrap_pyfunction!(load, m)?)?;

    m.add("ParseError", m.py().get_type::<ParseError>())?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
