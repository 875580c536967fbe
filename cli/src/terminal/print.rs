use gip_common::check::Checker;

/// Writes the single result line monitoring agents parse.
pub fn result(checker: &Checker) {
    println!("{checker}");
}
