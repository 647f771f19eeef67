//! SVG path data <-> subpaths of nodes.
//!
//! Every segment becomes a cubic: a line keeps both handles on their
//! anchors, quadratics are degree-elevated. `Z` appends a closing node on
//! the start anchor unless the path already returned there.

use crate::error::RoundError;
use crate::geometry::limits;
use crate::model::{Node, Path, Subpath, Vec2};
use std::fmt::Write;

fn is_cmd(c: u8) -> bool {
    matches!(
        c,
        b'M' | b'm' | b'L' | b'l' | b'H' | b'h' | b'V' | b'v' | b'C' | b'c' | b'S' | b's' | b'Q' | b'q'
            | b'T' | b't' | b'Z' | b'z' | b'A' | b'a'
    )
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() {
        let c = bytes[*i];
        if c == b' ' || c == b'\n' || c == b'\r' || c == b'\t' || c == b',' {
            *i += 1;
        } else {
            break;
        }
    }
}

/// Next number, or `None` when the next token is not a number.
fn parse_num(bytes: &[u8], i: &mut usize) -> Result<Option<f64>, RoundError> {
    skip_ws(bytes, i);
    let start = *i;
    let mut j = *i;
    if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
        j += 1;
    }
    let mut digits = 0;
    while j < bytes.len() && bytes[j].is_ascii_digit() {
        j += 1;
        digits += 1;
    }
    if j < bytes.len() && bytes[j] == b'.' {
        j += 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return Ok(None);
    }
    if j < bytes.len() && (bytes[j] == b'e' || bytes[j] == b'E') {
        let mut k = j + 1;
        if k < bytes.len() && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        if k < bytes.len() && bytes[k].is_ascii_digit() {
            while k < bytes.len() && bytes[k].is_ascii_digit() {
                k += 1;
            }
            j = k;
        }
    }
    let syntax = |message: &str| RoundError::PathSyntax { pos: start, message: message.to_string() };
    let s = std::str::from_utf8(&bytes[start..j]).map_err(|_| syntax("invalid utf-8"))?;
    let v: f64 = s.parse().map_err(|_| syntax("malformed number"))?;
    if !limits::in_coord_bounds(v) {
        return Err(syntax("coordinate out of range"));
    }
    *i = j;
    Ok(Some(v))
}

fn need_num(bytes: &[u8], i: &mut usize) -> Result<f64, RoundError> {
    let pos = *i;
    parse_num(bytes, i)?.ok_or(RoundError::PathSyntax { pos, message: "expected a number".to_string() })
}

struct Builder {
    subpaths: Vec<Subpath>,
    current: Option<Subpath>,
    cur: Vec2,
    start: Vec2,
    nodes: usize,
}

impl Builder {
    fn move_to(&mut self, p: Vec2) -> Result<(), RoundError> {
        self.finish();
        if self.subpaths.len() >= limits::MAX_SVG_SUBPATHS {
            return Err(RoundError::LimitExceeded("subpaths"));
        }
        self.current = Some(Subpath::new(vec![Node::corner(p)]));
        self.cur = p;
        self.start = p;
        self.count()
    }

    /// Subpath being drawn; after `Z` a drawing command restarts at the
    /// previous start point.
    fn active(&mut self) -> &mut Subpath {
        let start = self.start;
        self.current.get_or_insert_with(|| Subpath::new(vec![Node::corner(start)]))
    }

    fn line_to(&mut self, p: Vec2) -> Result<(), RoundError> {
        self.active().nodes.push(Node::corner(p));
        self.cur = p;
        self.count()
    }

    fn cubic_to(&mut self, c1: Vec2, c2: Vec2, p: Vec2) -> Result<(), RoundError> {
        let sp = self.active();
        if let Some(last) = sp.nodes.last_mut() {
            last.out_handle = c1;
        }
        sp.nodes.push(Node::new(c2, p, p));
        self.cur = p;
        self.count()
    }

    fn quad_to(&mut self, q: Vec2, p: Vec2) -> Result<(), RoundError> {
        let p0 = self.cur;
        self.cubic_to(p0 + (q - p0) * (2.0 / 3.0), p + (q - p) * (2.0 / 3.0), p)
    }

    fn close(&mut self) -> Result<(), RoundError> {
        let start = self.start;
        let sp = self.active();
        let Some(&last) = sp.nodes.last() else { return Ok(()) };
        if sp.nodes.len() > 1 && last.anchor == start {
            // The closing node carries the incoming tangent of node 0.
            if last.has_in_handle() {
                sp.nodes[0].in_handle = last.in_handle;
            }
        } else {
            sp.nodes.push(Node::corner(start));
            self.nodes += 1;
        }
        self.finish();
        self.cur = start;
        if self.nodes > limits::MAX_SVG_NODES {
            return Err(RoundError::LimitExceeded("nodes"));
        }
        Ok(())
    }

    fn finish(&mut self) {
        if let Some(sp) = self.current.take() {
            self.subpaths.push(sp);
        }
    }

    fn count(&mut self) -> Result<(), RoundError> {
        self.nodes += 1;
        if self.nodes > limits::MAX_SVG_NODES {
            return Err(RoundError::LimitExceeded("nodes"));
        }
        Ok(())
    }
}

/// Parse SVG path data into subpaths.
pub fn parse_path(d: &str) -> Result<Path, RoundError> {
    if d.len() > limits::MAX_SVG_TOKENS {
        return Err(RoundError::LimitExceeded("path data length"));
    }
    let bytes = d.as_bytes();
    let mut i = 0usize;
    let mut b = Builder {
        subpaths: Vec::new(),
        current: None,
        cur: Vec2::ZERO,
        start: Vec2::ZERO,
        nodes: 0,
    };
    let mut last_cmd: Option<u8> = None;
    let mut cmd_count = 0usize;
    // Second control point of the previous C/S or Q/T, for reflection.
    let mut last_cubic: Option<Vec2> = None;
    let mut last_quad: Option<Vec2> = None;

    loop {
        skip_ws(bytes, &mut i);
        if i >= bytes.len() {
            break;
        }
        let c = bytes[i];
        let cmd = if is_cmd(c) {
            i += 1;
            c
        } else {
            // Repeated arguments reuse the previous command; after M they are lines.
            match last_cmd {
                Some(b'M') => b'L',
                Some(b'm') => b'l',
                Some(b'Z' | b'z') | None => {
                    return Err(RoundError::PathSyntax { pos: i, message: "expected a command".to_string() })
                }
                Some(prev) => prev,
            }
        };
        if last_cmd.is_none() && cmd != b'M' && cmd != b'm' {
            return Err(RoundError::PathSyntax { pos: i, message: "path data must start with M".to_string() });
        }
        cmd_count += 1;
        if cmd_count > limits::MAX_SVG_COMMANDS {
            return Err(RoundError::LimitExceeded("commands"));
        }
        let rel = cmd.is_ascii_lowercase();
        let origin = if rel { b.cur } else { Vec2::ZERO };
        let pt = |bytes: &[u8], i: &mut usize| -> Result<Vec2, RoundError> {
            let x = need_num(bytes, i)?;
            let y = need_num(bytes, i)?;
            Ok(origin + Vec2::new(x, y))
        };
        let (mut next_cubic, mut next_quad) = (None, None);
        match cmd.to_ascii_uppercase() {
            b'M' => b.move_to(pt(bytes, &mut i)?)?,
            b'L' => b.line_to(pt(bytes, &mut i)?)?,
            b'H' => {
                let x = need_num(bytes, &mut i)? + origin.x;
                b.line_to(Vec2::new(x, b.cur.y))?
            }
            b'V' => {
                let y = need_num(bytes, &mut i)? + origin.y;
                b.line_to(Vec2::new(b.cur.x, y))?
            }
            b'C' => {
                let c1 = pt(bytes, &mut i)?;
                let c2 = pt(bytes, &mut i)?;
                let p = pt(bytes, &mut i)?;
                b.cubic_to(c1, c2, p)?;
                next_cubic = Some(c2);
            }
            b'S' => {
                let c1 = last_cubic.map_or(b.cur, |c| b.cur + (b.cur - c));
                let c2 = pt(bytes, &mut i)?;
                let p = pt(bytes, &mut i)?;
                b.cubic_to(c1, c2, p)?;
                next_cubic = Some(c2);
            }
            b'Q' => {
                let q = pt(bytes, &mut i)?;
                let p = pt(bytes, &mut i)?;
                b.quad_to(q, p)?;
                next_quad = Some(q);
            }
            b'T' => {
                let q = last_quad.map_or(b.cur, |c| b.cur + (b.cur - c));
                let p = pt(bytes, &mut i)?;
                b.quad_to(q, p)?;
                next_quad = Some(q);
            }
            b'Z' => b.close()?,
            other => return Err(RoundError::UnsupportedCommand(other as char)),
        }
        last_cubic = next_cubic;
        last_quad = next_quad;
        last_cmd = Some(cmd);
    }
    b.finish();
    Ok(Path::new(b.subpaths))
}

fn fmt_num(out: &mut String, v: f64) {
    // No "-0" in output.
    let v = if v == 0.0 { 0.0 } else { v };
    let _ = write!(out, "{}", v);
}

fn fmt_pt(out: &mut String, p: Vec2) {
    fmt_num(out, p.x);
    out.push(',');
    fmt_num(out, p.y);
}

/// Serialize subpaths as absolute SVG path data.
pub fn to_path_data(path: &Path) -> String {
    let mut out = String::new();
    for sp in path.subpaths.iter().filter(|sp| !sp.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str("M ");
        fmt_pt(&mut out, sp.nodes[0].anchor);
        for w in sp.nodes.windows(2) {
            let (a, b) = (&w[0], &w[1]);
            if !a.has_out_handle() && !b.has_in_handle() {
                out.push_str(" L ");
            } else {
                out.push_str(" C ");
                fmt_pt(&mut out, a.out_handle);
                out.push(' ');
                fmt_pt(&mut out, b.in_handle);
                out.push(' ');
            }
            fmt_pt(&mut out, b.anchor);
        }
        if sp.is_closed() {
            out.push_str(" Z");
        }
    }
    out
}
