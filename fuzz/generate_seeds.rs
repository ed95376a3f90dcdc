#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PGM 3x2
    let pgm = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    fs::write(format!("{dir}/pgm_3x2.pgm"), pgm).unwrap();

    // PGM 2x2, maxval 10
    let low = b"P5\n2 2\n10\n\x00\x05\x0a\x03";
    fs::write(format!("{dir}/pgm_maxval10.pgm"), low).unwrap();

    // Comments and irregular whitespace in the header
    let commented = b"P5 #magic\r\n# size follows\n 2\t1\n#max\n255\n\x07\x09";
    fs::write(format!("{dir}/pgm_comments.pgm"), commented).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p5.bin"), b"P5").unwrap();
    fs::write(format!("{dir}/short_raster.bin"), b"P5\n3 3\n255\n\x01\x02").unwrap();
    fs::write(format!("{dir}/over_maxval.bin"), b"P5\n2 1\n10\n\x05\x14").unwrap();
    fs::write(format!("{dir}/maxval_256.bin"), b"P5\n1 1\n256\n\x00").unwrap();
    fs::write(format!("{dir}/negative_width.bin"), b"P5\n-1 1\n255\n\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
