use vergen_gitcl::{Emitter, GitclBuilder};

fn emit_git_info() -> Result<(), Box<dyn std::error::Error>> {
    let gitcl = GitclBuilder::default().sha(true).branch(true).build()?;
    Emitter::default().add_instructions(&gitcl)?.emit()?;
    Ok(())
}

fn main() {
    // If this is not run inside a git repository we get an error.
    // This happens when installing the crate via cargo.
    // As a quick fix, we just ignore it.
    let _ = emit_git_info();
}
