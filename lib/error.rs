pub type Result<T, SCRER> = core::result::Result<T, Error<SCRER>>;

#[derive(Debug)]
pub enum Error<SCR> {
    // Hw screen error
    Screen(SCR),
    // Text buffer
    BufferWrite,
}
