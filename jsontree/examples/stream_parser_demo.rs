// Example demonstrating StreamParser over stdin, or over a chunked in-memory
// document when stdin is empty.
//
//   echo '{"a": [1, 2]} // more' | cargo run --example stream_parser_demo

use jsontree::{ChunkReader, IoReader, ParseError, StreamParser};

fn main() -> Result<(), ParseError> {
    let mut buffer = [0u8; 256];
    let roots = StreamParser::new(IoReader::new(std::io::stdin().lock()), &mut buffer).parse()?;

    if roots.is_empty().unwrap_or(true) {
        let json = br#"{"name": "hello\nworld", "items": [1, 2.5, true, null], "count": 42}"#;
        println!("No input on stdin, parsing a built-in document in 8 byte chunks");
        // Simulates small network packets.
        let reader = ChunkReader::new(json, 8);
        let mut buffer = [0u8; 16];
        let roots = StreamParser::new(reader, &mut buffer).parse()?;
        println!("{roots:#}");
        return Ok(());
    }

    println!("{roots:#}");
    Ok(())
}
