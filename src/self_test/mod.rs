mod self_test;

pub use self_test::SelfTestCase;
pub use self_test::SelfTestReport;
pub use self_test::SelfTestResult;
pub use self_test::SelfTestSuite;
