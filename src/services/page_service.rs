//! services/page_service.rs
//! Render de la página con tera. La plantilla va embebida en el binario.

use std::sync::Arc;

use anyhow::{Context, Result};
use tera::Tera;

use crate::models::page_model::PageView;

const INDEX_TEMPLATE: &str = "index.html";

/// Descripción informativa de cada servicio (título, texto).
const SERVICE_DESCRIPTIONS: [(&str, &str); 10] = [
    (
        "Income Tax",
        "Whether you're a salaried individual or a freelancer, calculating and filing income tax correctly is crucial. We assist in accurate income declarations, applying eligible deductions (under 80C, 80D, etc.), and timely ITR filing, ensuring zero penalties and maximum savings.",
    ),
    (
        "Capital Gains Tax",
        "Profits from selling real estate, shares, or other capital assets may attract short-term or long-term capital gains tax. Lacleo helps compute accurate liabilities, apply exemptions (like Section 54, 54F), and structure your gains for tax efficiency.",
    ),
    (
        "Dividend Tax",
        "If you receive dividends from your investments, understanding the TDS rules and tax implications is vital. We help you track your income, manage deductions, and ensure proper compliance in light of the new tax regime on dividends.",
    ),
    (
        "GST (Goods and Services Tax)",
        "This multi-stage, destination-based indirect tax applies to most goods and services. Lacleo helps you register under GST, file monthly or quarterly returns, manage input tax credits, and stay audit-ready at all times.",
    ),
    (
        "TDS (Tax Deducted at Source)",
        "TDS requires businesses and certain individuals to deduct tax while making specific payments. We ensure correct TDS deductions, timely payments, and accurate record-keeping, helping you avoid penalties and notices.",
    ),
    (
        "TDS Return Filing",
        "Filing TDS returns like Form 24Q, 26Q, or 27Q is mandatory for deductors. We handle quarterly submissions, validate data, and ensure flawless filing through digital platforms like TRACES.",
    ),
    (
        "Income Tax Return (ITR-3 or ITR-4)",
        "Choosing the correct ITR form based on your income from profession, business, or presumptive tax is critical. We help select, fill, and file your ITR form accurately while maintaining all required financial documentation.",
    ),
    (
        "Advance Tax",
        "If your tax liability exceeds ₹10,000/year, advance tax applies. Lacleo calculates your due amounts across four installments and helps you pay on time to avoid interest under Sections 234B/234C.",
    ),
    (
        "GST Return Filing",
        "GST return filing ensures you get your Input Tax Credit and maintain compliance. From GSTR-1 to GSTR-9, we manage the entire cycle, even for multiple states or turnover brackets.",
    ),
    (
        "Professional Tax",
        "Levied by certain states like Maharashtra and Karnataka, this tax varies based on salary or profession. We assist with registrations, monthly deductions, and returns as per state norms.",
    ),
];

#[derive(Clone)]
pub struct PageService {
    engine: Arc<Tera>,
}

impl PageService {
    pub fn new() -> Result<Self> {
        let mut engine = Tera::default();
        engine
            .add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))
            .context("No se pudo cargar la plantilla index.html")?;

        Ok(Self {
            engine: Arc::new(engine),
        })
    }

    pub fn render(&self, view: &PageView) -> Result<String> {
        let mut context = tera::Context::from_serialize(view)
            .context("No se pudo serializar la vista de la página")?;
        let descriptions: Vec<_> = SERVICE_DESCRIPTIONS
            .iter()
            .map(|(title, text)| serde_json::json!({ "title": title, "text": text }))
            .collect();
        context.insert("descriptions", &descriptions);

        self.engine
            .render(INDEX_TEMPLATE, &context)
            .context("Error renderizando index.html")
    }
}
