fn main() -> Result<(), mercurial_paint::PaintError> {
    mercurial_paint::app::run()
}
