//! Site assembly.

use pods_catalog::prelude::{Catalog, CatalogQuery, GalleryFilter, GalleryImage, Product};
use pods_observability::{LogSink, StructuredLogger};
use pods_quote::channel::{Handoff, HandoffSink};
use pods_quote::contact::ContactForm;
use pods_quote::form::OrderForm;
use pods_quote::pricing::QuoteBreakdown;
use pods_quote::submission::{submit_order, Submission, SubmitContext};
use pods_quote::QuoteError;
use pods_viewer::Lightbox;

use crate::config::SiteConfig;
use crate::error::SiteError;

/// Site builder.
///
/// # Example
///
/// ```rust
/// use pods_core::{SiteApp, SiteConfig};
///
/// let site = SiteApp::new(SiteConfig::default()).build().unwrap();
/// assert_eq!(site.catalog().products().len(), 5);
/// ```
#[derive(Debug)]
pub struct SiteApp {
    config: SiteConfig,
    catalog: Option<Catalog>,
    logger: Option<StructuredLogger>,
}

impl SiteApp {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            catalog: None,
            logger: None,
        }
    }

    /// Use `catalog` instead of the bundled one.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Log through `sink` with the configured level and format.
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.logger = Some(self.config.logger("site").with_sink(sink));
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Validate the config and load the catalogue.
    pub fn build(self) -> Result<Site, SiteError> {
        let logger = self
            .logger
            .unwrap_or_else(|| self.config.logger("site"));

        if let Err(e) = self.config.validate() {
            logger.error_builder("config rejected").field("error", e.to_string()).emit();
            return Err(e);
        }

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Catalog::bundled()?,
        };
        logger
            .info_builder("catalogue loaded")
            .field_i64("products", catalog.products().len() as i64)
            .field_i64("series", catalog.series().len() as i64)
            .field_i64("gallery", catalog.gallery().len() as i64)
            .emit();

        Ok(Site {
            config: self.config,
            catalog,
            logger,
        })
    }
}

/// A configured site: settings, catalogue and logger.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    catalog: Catalog,
    logger: StructuredLogger,
}

impl Site {
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Catalogue list for the series dropdown value and search box text.
    pub fn search(&self, series: &str, text: &str) -> Vec<&Product> {
        CatalogQuery::from_controls(series, text).apply(&self.catalog)
    }

    /// Gallery images for a category label ("All" for everything).
    pub fn gallery(&self, category: &str) -> Vec<&GalleryImage> {
        GalleryFilter::from_label(category).apply(self.catalog.gallery())
    }

    /// A closed lightbox using the configured viewer settings.
    pub fn lightbox(&self) -> Lightbox {
        Lightbox::new(self.config.viewer.clone())
    }

    /// Fresh order form, applying a `?series=` parameter if it names a known series.
    pub fn order_form(&self, series_param: Option<&str>) -> Result<OrderForm, QuoteError> {
        let mut form = OrderForm::new(&self.catalog)?;
        if let Some(requested) = series_param {
            if !form.preselect_series(Some(requested), &self.catalog)
                && form.series_id.as_str() != requested
            {
                self.logger
                    .debug_builder("unknown series parameter ignored")
                    .field("series", requested)
                    .emit();
            }
        }
        Ok(form)
    }

    pub fn quote(&self, form: &OrderForm) -> Result<QuoteBreakdown, QuoteError> {
        form.quote(&self.config.pricing)
    }

    /// Validate, compose and hand off an order enquiry.
    pub fn submit_order(
        &self,
        form: &OrderForm,
        sink: &mut dyn HandoffSink,
    ) -> Result<Submission, QuoteError> {
        let ctx = SubmitContext {
            catalog: &self.catalog,
            pricing: &self.config.pricing,
            channel: &self.config.enquiry,
        };
        match submit_order(form, ctx, sink) {
            Ok(submission) => {
                self.logger
                    .info_builder("enquiry handed off")
                    .field("channel", submission.handoff.channel())
                    .field("series", form.series_id.as_str())
                    .field_i64("quantity", i64::from(form.quantity.get()))
                    .field_i64("total", submission.quote.total.rupees)
                    .emit();
                Ok(submission)
            }
            Err(e) => {
                self.log_rejection("order", &e);
                Err(e)
            }
        }
    }

    /// Validate a contact form and open a mail link to the sales address.
    pub fn submit_contact(
        &self,
        form: &ContactForm,
        sink: &mut dyn HandoffSink,
    ) -> Result<Handoff, QuoteError> {
        match form.mail_link(&self.config.enquiry.fallback_email) {
            Ok(handoff) => {
                sink.open(&handoff);
                self.logger
                    .info_builder("contact message handed off")
                    .field("inquiry", form.inquiry.key())
                    .emit();
                Ok(handoff)
            }
            Err(e) => {
                self.log_rejection("contact", &e);
                Err(e)
            }
        }
    }

    fn log_rejection(&self, form: &str, err: &QuoteError) {
        let builder = self
            .logger
            .warn_builder("submission rejected")
            .field("form", form);
        match err {
            QuoteError::MissingFields(fields) => builder
                .field_list("missing", fields.iter().map(|f| f.label()))
                .emit(),
            other => builder.field("error", other.to_string()).emit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pods_observability::{LogFormat, MemorySink};
    use pods_quote::channel::RecordingSink;
    use pods_quote::form::BuyerDetails;

    fn site(sink: &MemorySink) -> Site {
        let mut config = SiteConfig::default();
        config.site.log_format = LogFormat::Human;
        SiteApp::new(config).with_sink(sink.clone()).build().unwrap()
    }

    #[test]
    fn test_build_logs_catalogue_load() {
        let sink = MemorySink::new();
        site(&sink);
        let lines = sink.lines();
        assert!(lines[0].starts_with("[INFO] site: catalogue loaded"));
        assert!(lines[0].contains("products=5"));
    }

    #[test]
    fn test_invalid_config_fails_build() {
        let mut config = SiteConfig::default();
        config.pricing.tax_rate_bps = 20_000;
        let sink = MemorySink::new();
        let err = SiteApp::new(config).with_sink(sink.clone()).build().unwrap_err();
        assert!(matches!(err, SiteError::Pricing(_)));
        assert!(sink.lines()[0].starts_with("[ERROR]"));
    }

    #[test]
    fn test_order_form_preselect() {
        let sink = MemorySink::new();
        let site = site(&sink);
        assert_eq!(site.order_form(Some("space")).unwrap().series_id.as_str(), "space");
        assert_eq!(site.order_form(Some("bogus")).unwrap().series_id.as_str(), "galaxy");
        assert_eq!(site.order_form(None).unwrap().series_id.as_str(), "galaxy");
    }

    #[test]
    fn test_rejection_is_logged_and_not_handed_off() {
        let sink = MemorySink::new();
        let site = site(&sink);
        let form = site.order_form(None).unwrap();
        let mut handoffs = RecordingSink::default();

        assert!(site.submit_order(&form, &mut handoffs).is_err());
        assert!(handoffs.opened.is_empty());
        let last = sink.lines().pop().unwrap();
        assert!(last.starts_with("[WARN] site: submission rejected"));
        assert!(last.contains(r#"missing=["Name","Phone","Email","City/State","Delivery Address"]"#));
    }

    #[test]
    fn test_successful_submission_logs_channel() {
        let sink = MemorySink::new();
        let site = site(&sink);
        let mut form = site.order_form(None).unwrap();
        form.buyer = BuyerDetails {
            name: "N".to_string(),
            phone: "P".to_string(),
            email: "e@x.in".to_string(),
            city: "C".to_string(),
            address: "A".to_string(),
            ..Default::default()
        };
        let mut handoffs = RecordingSink::default();
        let submission = site.submit_order(&form, &mut handoffs).unwrap();
        assert_eq!(submission.handoff.channel(), "mail");
        assert!(sink.lines().pop().unwrap().contains(r#"channel="mail""#));
    }

    #[test]
    fn test_gallery_and_search() {
        let sink = MemorySink::new();
        let site = site(&sink);
        assert_eq!(site.gallery("All").len(), 19);
        assert_eq!(site.search("all", "").len(), 5);
        assert_eq!(site.search("cosmos", "").len(), 1);
    }
}
