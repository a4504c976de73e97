use std::sync::Arc;

use logger::TracingLogger;
use mailer::SmtpMailService;
use persistence::db::Collections;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::sale::repository::SaleRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use reports::{HttpPhotoLoader, PrintPdfRenderer, XlsxSpreadsheetRenderer};
use security::{Argon2PasswordHasher, RandomTokenGenerator};
use storage::LocalPhotoStorage;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::report::customer_total::CustomerTotalReportUseCaseImpl;
use business::application::report::inventory::InventoryReportUseCaseImpl;
use business::application::report::receipt::SaleReceiptUseCaseImpl;
use business::application::report::sales_total::SalesTotalReportUseCaseImpl;
use business::application::report::stock_total::StockTotalReportUseCaseImpl;
use business::application::sale::create::CreateSaleUseCaseImpl;
use business::application::user::authenticate::AuthenticateUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::user::request_password_reset::RequestPasswordResetUseCaseImpl;
use business::application::user::reset_password::ResetPasswordUseCaseImpl;
use business::application::user::verify_reset_token::VerifyResetTokenUseCaseImpl;

use crate::api::auth::routes::AuthApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::home::routes::HomeApi;
use crate::api::product::routes::ProductApi;
use crate::api::report::routes::ReportApi;
use crate::api::sale::routes::SaleApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub home_api: HomeApi,
    pub auth_api: AuthApi,
    pub product_api: ProductApi,
    pub sale_api: SaleApi,
    pub report_api: ReportApi,
}

impl DependencyContainer {
    pub fn new(
        pool: sqlx::PgPool,
        collections: Collections,
        config: &AppConfig,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(
            pool.clone(),
            collections.clone(),
        ));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(
            pool.clone(),
            collections.clone(),
        ));
        let sale_repository = Arc::new(SaleRepositoryPostgres::new(pool.clone(), collections));
        let photo_storage = Arc::new(LocalPhotoStorage::new(&config.storage.upload_dir));
        let password_hasher = Arc::new(Argon2PasswordHasher::new());
        let token_generator = Arc::new(RandomTokenGenerator);
        let mail_service = Arc::new(SmtpMailService::new(config.mail.smtp_settings())?);
        let photo_loader = Arc::new(HttpPhotoLoader::new(&config.storage.upload_dir));
        let pdf_renderer = Arc::new(PrintPdfRenderer::new());
        let spreadsheet_renderer = Arc::new(XlsxSpreadsheetRenderer::new());

        // User use cases
        let authenticate_use_case = Arc::new(AuthenticateUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            logger: logger.clone(),
        });
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            logger: logger.clone(),
        });
        let request_reset_use_case = Arc::new(RequestPasswordResetUseCaseImpl {
            repository: user_repository.clone(),
            token_generator,
            mail_service,
            logger: logger.clone(),
        });
        let verify_token_use_case = Arc::new(VerifyResetTokenUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let reset_password_use_case = Arc::new(ResetPasswordUseCaseImpl {
            repository: user_repository,
            password_hasher,
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            photo_storage: photo_storage.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            photo_storage: photo_storage.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            photo_storage,
            logger: logger.clone(),
        });

        // Sale and report use cases
        let create_sale_use_case = Arc::new(CreateSaleUseCaseImpl {
            product_repository: product_repository.clone(),
            sale_repository: sale_repository.clone(),
            logger: logger.clone(),
        });
        let receipt_use_case = Arc::new(SaleReceiptUseCaseImpl {
            pdf_renderer: pdf_renderer.clone(),
            logger: logger.clone(),
        });
        let inventory_use_case = Arc::new(InventoryReportUseCaseImpl {
            product_repository: product_repository.clone(),
            photo_loader,
            pdf_renderer,
            logger: logger.clone(),
        });
        let sales_total_use_case = Arc::new(SalesTotalReportUseCaseImpl {
            sale_repository: sale_repository.clone(),
            spreadsheet_renderer: spreadsheet_renderer.clone(),
            logger: logger.clone(),
        });
        let stock_total_use_case = Arc::new(StockTotalReportUseCaseImpl {
            product_repository,
            spreadsheet_renderer: spreadsheet_renderer.clone(),
            logger: logger.clone(),
        });
        let customer_total_use_case = Arc::new(CustomerTotalReportUseCaseImpl {
            sale_repository,
            spreadsheet_renderer,
            logger,
        });

        let auth_api = AuthApi::new(
            authenticate_use_case,
            register_use_case,
            request_reset_use_case,
            verify_token_use_case,
            reset_password_use_case,
            config.base_url.clone(),
        );

        let product_api = ProductApi::new(
            create_product_use_case,
            get_all_products_use_case.clone(),
            get_product_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        let sale_api = SaleApi::new(
            create_sale_use_case,
            get_all_products_use_case,
            receipt_use_case,
        );

        let report_api = ReportApi::new(
            inventory_use_case,
            sales_total_use_case,
            stock_total_use_case,
            customer_total_use_case,
        );

        Ok(Self {
            health_api: HealthApi::new(pool),
            home_api: HomeApi::new(),
            auth_api,
            product_api,
            sale_api,
            report_api,
        })
    }
}
