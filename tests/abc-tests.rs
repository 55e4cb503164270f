extern crate regex;
use regex::{CaptureMatches, RegexBuilder};
use std::cmp::Ordering;

fn are_captures_sorted(matches: CaptureMatches, context: &str) -> Result<(), String> {
    let mut prev_string = "";
    for cap in matches {
        let capstring = cap.get(0).unwrap().as_str();
        match prev_string.cmp(capstring) {
            Ordering::Greater => return Err(format!("{} is not sorted in {}", &capstring, &context)),
            _ => {
                prev_string = capstring;
            }
        };
    }
    Ok(())
}

#[test]
fn test_librs() -> Result<(), String> {
    let librs = std::fs::read_to_string("src/lib.rs").unwrap();
    let modsre = RegexBuilder::new(r"(^pub mod .+?$)").multi_line(true).build().unwrap();
    are_captures_sorted(modsre.captures_iter(&librs), "lib.rs")
}

#[test]
fn test_sprite_sheet_modrs() -> Result<(), String> {
    let modrs = std::fs::read_to_string("src/sprite_sheet/mod.rs").unwrap();
    let modsre = RegexBuilder::new(r"(^pub mod .+?$)").multi_line(true).build().unwrap();
    are_captures_sorted(modsre.captures_iter(&modrs), "sprite_sheet/mod.rs")
}
