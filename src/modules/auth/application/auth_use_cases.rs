use std::sync::Arc;

use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, forgot_password::IForgotPasswordUseCase,
    login_admin::ILoginAdminUseCase, reset_password::IResetPasswordUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub forgot_password: Arc<dyn IForgotPasswordUseCase + Send + Sync>,
    pub reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
}
