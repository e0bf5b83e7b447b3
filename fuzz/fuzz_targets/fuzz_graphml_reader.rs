#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use graphml_io::graphml::{GraphMLReader, GraphMLWriter};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either parse or fail with an error, never panic
    let Ok(graph) = GraphMLReader::new().read_from(Cursor::new(data)) else {
        return;
    };

    // Anything that parsed must write out and read back with the same shape
    let xml = GraphMLWriter::new()
        .to_string(&graph)
        .expect("writing to memory cannot fail");
    if let Ok(back) = GraphMLReader::new().read_str(&xml) {
        assert_eq!(back.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(back.number_of_edges(), graph.number_of_edges());
    }
});
