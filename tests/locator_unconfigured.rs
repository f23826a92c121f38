//! 无提供者进程的失败行为测试
//!
//! 库作用域是进程全局且只增不减的，本文件单独成一个测试进程，
//! 保证两个作用域都没有任何注册

use vitals_api::response::{named, ResponseBuilderFactory};
use vitals_api::{ProviderError, VitalsApiError};

#[test]
fn test_named_without_any_provider_reports_not_found() {
    let err = named("database").unwrap_err();

    match err {
        VitalsApiError::Provider(ProviderError::NotFound { capability }) => {
            assert!(capability.contains("ResponseBuilderFactory"));
        }
        other => panic!("预期 ProviderError::NotFound, 实际: {other}"),
    }

    // 直接定位能力得到同样的结果
    let err = vitals_api::locate::<dyn ResponseBuilderFactory>().unwrap_err();
    assert!(matches!(err, ProviderError::NotFound { .. }));
}
