use mockall::mock;
use ls8_core::common::CpuError;
use ls8_core::soc::OutputSink;

mock! {
    pub Console {}
    impl OutputSink for Console {
        fn print(&mut self, value: u8) -> Result<(), CpuError>;
    }
}
