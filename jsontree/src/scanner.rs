// SPDX-License-Identifier: Apache-2.0

//! Locating the next significant byte.
//!
//! Whitespace skipping runs at every token boundary, so slices are scanned in
//! blocks: 32 bytes with AVX2, 16 with SSE2, then one byte at a time for the
//! tail. Each block is compared against the four whitespace bytes in
//! parallel, and the first non-whitespace lane is found with a bit scan.
//! Comment terminators (`\n` and `*`) are searched for with the same scheme.
//!
//! The vector paths exist only with the `simd` feature on `x86_64`; every
//! other target uses the scalar routines, which are also the reference the
//! vector paths are tested against.

use crate::parse_error::{ErrorKind, ParseError};
use crate::shared::{is_whitespace, InputSource};

/// Index of the first byte at or after `pos` that is not JSON whitespace,
/// or `input.len()`.
pub fn skip_whitespace(input: &[u8], pos: usize) -> usize {
    let pos = pos.min(input.len());
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        // SAFETY: SSE2 is part of the x86_64 baseline; AVX2 only when detected.
        match x86::vector_level() {
            x86::VectorLevel::Avx2 => unsafe { x86::skip_whitespace_avx2(input, pos) },
            x86::VectorLevel::Sse2 => unsafe { x86::skip_whitespace_sse2(input, pos) },
        }
    }
    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    {
        skip_whitespace_scalar(input, pos)
    }
}

/// Byte-at-a-time version of [`skip_whitespace`].
pub fn skip_whitespace_scalar(input: &[u8], pos: usize) -> usize {
    let pos = pos.min(input.len());
    let rest = input.get(pos..).unwrap_or_default();
    rest.iter()
        .position(|&b| !is_whitespace(b))
        .map_or(input.len(), |offset| pos + offset)
}

/// Index of the first byte at or after `pos` that is neither whitespace nor
/// part of a comment, or `input.len()`.
pub fn skip_insignificant(input: &[u8], pos: usize) -> Result<usize, ParseError> {
    let mut pos = pos;
    loop {
        pos = skip_whitespace(input, pos);
        match input.get(pos) {
            Some(b'/') => pos = skip_comment(input, pos)?,
            _ => return Ok(pos),
        }
    }
}

/// Skips the comment starting at `pos`.
///
/// Returns the index just past the comment: the terminating newline of a
/// line comment (left for whitespace skipping) or the byte after `*/`.
/// Anything at `pos` other than `//` or `/*` is `InvalidCommentSyntax`.
pub fn skip_comment(input: &[u8], pos: usize) -> Result<usize, ParseError> {
    // Both arms see at least two bytes at `pos`, so `pos + 2 <= input.len()`.
    match input.get(pos..).unwrap_or_default() {
        [b'/', b'/', ..] => Ok(find_byte(input, pos + 2, b'\n').unwrap_or(input.len())),
        [b'/', b'*', ..] => {
            let mut from = pos + 2;
            while let Some(star) = find_byte(input, from, b'*') {
                if input.get(star + 1) == Some(&b'/') {
                    return Ok(star + 2);
                }
                from = star + 1;
            }
            ParseError::err(ErrorKind::UnterminatedComment, pos)
        }
        _ => ParseError::err(ErrorKind::InvalidCommentSyntax, pos),
    }
}

fn find_byte(input: &[u8], pos: usize, needle: u8) -> Option<usize> {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        // SAFETY: as in skip_whitespace.
        match x86::vector_level() {
            x86::VectorLevel::Avx2 => unsafe { x86::find_byte_avx2(input, pos, needle) },
            x86::VectorLevel::Sse2 => unsafe { x86::find_byte_sse2(input, pos, needle) },
        }
    }
    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    {
        find_byte_scalar(input, pos, needle)
    }
}

fn find_byte_scalar(input: &[u8], pos: usize, needle: u8) -> Option<usize> {
    input
        .get(pos..)?
        .iter()
        .position(|&b| b == needle)
        .map(|offset| pos + offset)
}

/// Whitespace skipping for forward-only sources.
pub(crate) fn skip_whitespace_stream<I: InputSource + ?Sized>(
    input: &mut I,
) -> Result<(), ParseError> {
    while let Some(byte) = input.peek()? {
        if !is_whitespace(byte) {
            break;
        }
        input.advance();
    }
    Ok(())
}

/// Whitespace and comment skipping for forward-only sources.
pub(crate) fn skip_insignificant_stream<I: InputSource + ?Sized>(
    input: &mut I,
) -> Result<(), ParseError> {
    loop {
        skip_whitespace_stream(input)?;
        if input.peek()? != Some(b'/') {
            return Ok(());
        }
        skip_comment_stream(input)?;
    }
}

fn skip_comment_stream<I: InputSource + ?Sized>(input: &mut I) -> Result<(), ParseError> {
    let start = input.position();
    input.advance();
    match input.next_byte()? {
        Some(b'/') => {
            while let Some(byte) = input.peek()? {
                if byte == b'\n' {
                    break;
                }
                input.advance();
            }
            Ok(())
        }
        Some(b'*') => {
            let mut after_star = false;
            while let Some(byte) = input.next_byte()? {
                if after_star && byte == b'/' {
                    return Ok(());
                }
                after_star = byte == b'*';
            }
            ParseError::err(ErrorKind::UnterminatedComment, start)
        }
        _ => ParseError::err(ErrorKind::InvalidCommentSyntax, start),
    }
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod x86 {
    use core::arch::x86_64::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(super) enum VectorLevel {
        Sse2,
        Avx2,
    }

    #[cfg(feature = "std")]
    pub(super) fn vector_level() -> VectorLevel {
        use core::sync::atomic::{AtomicU8, Ordering};

        // 0 = not yet detected
        static LEVEL: AtomicU8 = AtomicU8::new(0);

        match LEVEL.load(Ordering::Relaxed) {
            1 => VectorLevel::Sse2,
            2 => VectorLevel::Avx2,
            _ => {
                let level = if std::is_x86_feature_detected!("avx2") {
                    VectorLevel::Avx2
                } else {
                    VectorLevel::Sse2
                };
                log::trace!("scanner using {level:?}");
                LEVEL.store(level as u8 + 1, Ordering::Relaxed);
                level
            }
        }
    }

    #[cfg(not(feature = "std"))]
    pub(super) fn vector_level() -> VectorLevel {
        if cfg!(target_feature = "avx2") {
            VectorLevel::Avx2
        } else {
            VectorLevel::Sse2
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn skip_whitespace_avx2(input: &[u8], mut pos: usize) -> usize {
        let space = _mm256_set1_epi8(b' ' as i8);
        let tab = _mm256_set1_epi8(b'\t' as i8);
        let cr = _mm256_set1_epi8(b'\r' as i8);
        let lf = _mm256_set1_epi8(b'\n' as i8);

        while pos + 32 <= input.len() {
            let chunk = _mm256_loadu_si256(input.as_ptr().add(pos).cast());
            let ws = _mm256_or_si256(
                _mm256_or_si256(_mm256_cmpeq_epi8(chunk, space), _mm256_cmpeq_epi8(chunk, tab)),
                _mm256_or_si256(_mm256_cmpeq_epi8(chunk, cr), _mm256_cmpeq_epi8(chunk, lf)),
            );
            let mask = !(_mm256_movemask_epi8(ws) as u32);
            if mask != 0 {
                return pos + mask.trailing_zeros() as usize;
            }
            pos += 32;
        }
        skip_whitespace_sse2(input, pos)
    }

    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn skip_whitespace_sse2(input: &[u8], mut pos: usize) -> usize {
        let space = _mm_set1_epi8(b' ' as i8);
        let tab = _mm_set1_epi8(b'\t' as i8);
        let cr = _mm_set1_epi8(b'\r' as i8);
        let lf = _mm_set1_epi8(b'\n' as i8);

        while pos + 16 <= input.len() {
            let chunk = _mm_loadu_si128(input.as_ptr().add(pos).cast());
            let ws = _mm_or_si128(
                _mm_or_si128(_mm_cmpeq_epi8(chunk, space), _mm_cmpeq_epi8(chunk, tab)),
                _mm_or_si128(_mm_cmpeq_epi8(chunk, cr), _mm_cmpeq_epi8(chunk, lf)),
            );
            let mask = !(_mm_movemask_epi8(ws) as u32) & 0xFFFF;
            if mask != 0 {
                return pos + mask.trailing_zeros() as usize;
            }
            pos += 16;
        }
        super::skip_whitespace_scalar(input, pos)
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn find_byte_avx2(input: &[u8], mut pos: usize, needle: u8) -> Option<usize> {
        let wanted = _mm256_set1_epi8(needle as i8);
        while pos + 32 <= input.len() {
            let chunk = _mm256_loadu_si256(input.as_ptr().add(pos).cast());
            let mask = _mm256_movemask_epi8(_mm256_cmpeq_epi8(chunk, wanted)) as u32;
            if mask != 0 {
                return Some(pos + mask.trailing_zeros() as usize);
            }
            pos += 32;
        }
        find_byte_sse2(input, pos, needle)
    }

    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn find_byte_sse2(input: &[u8], mut pos: usize, needle: u8) -> Option<usize> {
        let wanted = _mm_set1_epi8(needle as i8);
        while pos + 16 <= input.len() {
            let chunk = _mm_loadu_si128(input.as_ptr().add(pos).cast());
            let mask = _mm_movemask_epi8(_mm_cmpeq_epi8(chunk, wanted)) as u32;
            if mask != 0 {
                return Some(pos + mask.trailing_zeros() as usize);
            }
            pos += 16;
        }
        super::find_byte_scalar(input, pos, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use test_log::test;

    fn padded(prefix: usize, tail: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        for i in 0..prefix {
            data.push([b' ', b'\t', b'\r', b'\n'][i % 4]);
        }
        data.extend_from_slice(tail);
        data
    }

    #[test]
    fn test_skip_whitespace_matches_scalar_at_every_offset() {
        // Lengths around the 16- and 32-byte block boundaries.
        for prefix in 0..80 {
            let data = padded(prefix, b"x  ");
            for start in 0..data.len() {
                assert_eq!(
                    skip_whitespace(&data, start),
                    skip_whitespace_scalar(&data, start),
                    "prefix {prefix}, start {start}"
                );
            }
            assert_eq!(skip_whitespace(&data, 0), prefix);
        }
    }

    #[test]
    fn test_skip_whitespace_all_blank() {
        let data = padded(70, b"");
        assert_eq!(skip_whitespace(&data, 0), 70);
        assert_eq!(skip_whitespace(&data, 70), 70);
        assert_eq!(skip_whitespace(b"", 0), 0);
    }

    #[test]
    fn test_find_byte_matches_scalar() {
        for len in 0..70 {
            let mut data = padded(len, b"*");
            data.extend_from_slice(b"tail");
            assert_eq!(find_byte(&data, 0, b'*'), Some(len));
            assert_eq!(find_byte(&data, 0, b'*'), find_byte_scalar(&data, 0, b'*'));
            assert_eq!(find_byte(&data, len + 1, b'*'), None);
        }
    }

    #[test]
    fn test_line_comment() {
        let data = b"// note\n  1";
        assert_eq!(skip_comment(data, 0), Ok(7));
        assert_eq!(skip_insignificant(data, 0), Ok(10));
        assert_eq!(skip_insignificant(b"1 // to end", 1), Ok(11));
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(skip_comment(b"/**/x", 0), Ok(4));
        assert_eq!(skip_comment(b"/* a * b **/x", 0), Ok(12));
        assert_eq!(skip_insignificant(b" /* a */ /* b */ 7", 0), Ok(17));
        let long = padded(100, b"*/ 1");
        let mut data = Vec::from(&b"/*"[..]);
        data.extend_from_slice(&long);
        assert_eq!(skip_insignificant(&data, 0), Ok(data.len() - 1));
    }

    #[test]
    fn test_out_of_range_positions() {
        assert_eq!(skip_whitespace(b"  ", usize::MAX), 2);
        assert_eq!(skip_whitespace_scalar(b"  ", usize::MAX), 2);
        assert_eq!(
            skip_comment(b"//", usize::MAX),
            ParseError::err(ErrorKind::InvalidCommentSyntax, usize::MAX)
        );
        assert_eq!(
            skip_comment(b"x/", 1),
            ParseError::err(ErrorKind::InvalidCommentSyntax, 1)
        );
        assert_eq!(skip_insignificant(b"1", usize::MAX), Ok(1));
    }

    #[test]
    fn test_comment_errors() {
        assert_eq!(
            skip_comment(b"/* never closed *", 0),
            ParseError::err(ErrorKind::UnterminatedComment, 0)
        );
        assert_eq!(
            skip_comment(b"/*/", 0),
            ParseError::err(ErrorKind::UnterminatedComment, 0)
        );
        assert_eq!(
            skip_insignificant(b"  /x", 0),
            ParseError::err(ErrorKind::InvalidCommentSyntax, 2)
        );
        assert_eq!(
            skip_insignificant(b"/", 0),
            ParseError::err(ErrorKind::InvalidCommentSyntax, 0)
        );
    }
}
