//! Embedded Banxico institution table.
//!
//! Codes and names follow the Banxico/SPEI participant list. This module
//! is data, not logic; [`crate::catalog`] turns the table into an indexed
//! catalog.

use clabe_core::types::{BankKind, BankRecord};

/// One table row: code, short name, full legal name, display name, kind.
type Row = (&'static str, &'static str, &'static str, &'static str, BankKind);

#[rustfmt::skip]
const BANKS: &[Row] = &[
    // Commercial banks (banca múltiple)
    ("002", "Banamex", "Banco Nacional de México, S.A., Integrante del Grupo Financiero Banamex", "BANAMEX", BankKind::Commercial),
    ("012", "BBVA México", "BBVA México, S.A., Institución de Banca Múltiple, Grupo Financiero BBVA México", "BBVA MEXICO", BankKind::Commercial),
    ("014", "Santander", "Banco Santander México, S.A., Institución de Banca Múltiple, Grupo Financiero Santander México", "SANTANDER", BankKind::Commercial),
    ("021", "HSBC", "HSBC México, S.A., Institución de Banca Múltiple, Grupo Financiero HSBC", "HSBC", BankKind::Commercial),
    ("030", "BanBajío", "Banco del Bajío, S.A., Institución de Banca Múltiple", "BAJIO", BankKind::Commercial),
    ("036", "Inbursa", "Banco Inbursa, S.A., Institución de Banca Múltiple, Grupo Financiero Inbursa", "INBURSA", BankKind::Commercial),
    ("042", "Mifel", "Banca Mifel, S.A., Institución de Banca Múltiple, Grupo Financiero Mifel", "MIFEL", BankKind::Commercial),
    ("044", "Scotiabank", "Scotiabank Inverlat, S.A., Institución de Banca Múltiple, Grupo Financiero Scotiabank Inverlat", "SCOTIABANK", BankKind::Commercial),
    ("058", "Banregio", "Banco Regional, S.A., Institución de Banca Múltiple, Banregio Grupo Financiero", "BANREGIO", BankKind::Commercial),
    ("059", "Invex", "Banco Invex, S.A., Institución de Banca Múltiple, Invex Grupo Financiero", "INVEX", BankKind::Commercial),
    ("060", "Bansí", "Bansí, S.A., Institución de Banca Múltiple", "BANSI", BankKind::Commercial),
    ("062", "Afirme", "Banca Afirme, S.A., Institución de Banca Múltiple, Afirme Grupo Financiero", "AFIRME", BankKind::Commercial),
    ("072", "Banorte", "Banco Mercantil del Norte, S.A., Institución de Banca Múltiple, Grupo Financiero Banorte", "BANORTE", BankKind::Commercial),
    ("106", "Bank of America", "Bank of America México, S.A., Institución de Banca Múltiple", "BANK OF AMERICA", BankKind::Commercial),
    ("108", "MUFG", "MUFG Bank México, S.A., Institución de Banca Múltiple Filial", "MUFG", BankKind::Commercial),
    ("110", "JP Morgan", "Banco J.P. Morgan, S.A., Institución de Banca Múltiple, J.P. Morgan Grupo Financiero", "JP MORGAN", BankKind::Commercial),
    ("112", "Monex", "Banco Monex, S.A., Institución de Banca Múltiple, Monex Grupo Financiero", "BMONEX", BankKind::Commercial),
    ("113", "Ve por Más", "Banco Ve por Más, S.A., Institución de Banca Múltiple, Grupo Financiero Ve por Más", "VE POR MAS", BankKind::Commercial),
    ("127", "Azteca", "Banco Azteca, S.A., Institución de Banca Múltiple", "AZTECA", BankKind::Commercial),
    ("128", "Autofin", "Banco Autofin México, S.A., Institución de Banca Múltiple", "AUTOFIN", BankKind::Commercial),
    ("129", "Barclays", "Barclays Bank México, S.A., Institución de Banca Múltiple, Grupo Financiero Barclays México", "BARCLAYS", BankKind::Commercial),
    ("130", "Compartamos", "Banco Compartamos, S.A., Institución de Banca Múltiple", "COMPARTAMOS", BankKind::Commercial),
    ("132", "Multiva", "Banco Multiva, S.A., Institución de Banca Múltiple, Grupo Financiero Multiva", "MULTIVA BANCO", BankKind::Commercial),
    ("133", "Actinver", "Banco Actinver, S.A., Institución de Banca Múltiple, Grupo Financiero Actinver", "ACTINVER", BankKind::Commercial),
    ("136", "Intercam", "Intercam Banco, S.A., Institución de Banca Múltiple, Intercam Grupo Financiero", "INTERCAM BANCO", BankKind::Commercial),
    ("137", "BanCoppel", "BanCoppel, S.A., Institución de Banca Múltiple", "BANCOPPEL", BankKind::Commercial),
    ("138", "ABC Capital", "ABC Capital, S.A., Institución de Banca Múltiple", "ABC CAPITAL", BankKind::Commercial),
    ("140", "Consubanco", "Consubanco, S.A., Institución de Banca Múltiple", "CONSUBANCO", BankKind::Commercial),
    ("141", "Volkswagen Bank", "Volkswagen Bank, S.A., Institución de Banca Múltiple", "VOLKSWAGEN", BankKind::Commercial),
    ("143", "CIBanco", "CIBanco, S.A., Institución de Banca Múltiple", "CIBANCO", BankKind::Commercial),
    ("145", "Banco Base", "Banco Base, S.A., Institución de Banca Múltiple, Grupo Financiero Base", "BBASE", BankKind::Commercial),
    ("147", "Bankaool", "Bankaool, S.A., Institución de Banca Múltiple", "BANKAOOL", BankKind::Commercial),
    ("148", "PagaTodo", "Banco PagaTodo, S.A., Institución de Banca Múltiple", "PAGATODO", BankKind::Commercial),
    ("150", "BIM", "Banco Inmobiliario Mexicano, S.A., Institución de Banca Múltiple", "INMOBILIARIO", BankKind::Commercial),
    ("151", "Dondé Banco", "Fundación Dondé Banco, S.A., Institución de Banca Múltiple", "DONDE", BankKind::Commercial),
    ("152", "Bancrea", "Banco Bancrea, S.A., Institución de Banca Múltiple", "BANCREA", BankKind::Commercial),
    ("154", "Finterra", "Banco Finterra, S.A., Institución de Banca Múltiple", "FINTERRA", BankKind::Commercial),
    ("155", "ICBC", "Industrial and Commercial Bank of China México, S.A., Institución de Banca Múltiple", "ICBC", BankKind::Commercial),
    ("156", "Sabadell", "Banco Sabadell, S.A., Institución de Banca Múltiple", "SABADELL", BankKind::Commercial),
    ("157", "Shinhan", "Banco Shinhan de México, S.A., Institución de Banca Múltiple", "SHINHAN", BankKind::Commercial),
    ("158", "Mizuho", "Mizuho Bank México, S.A., Institución de Banca Múltiple", "MIZUHO BANK", BankKind::Commercial),
    ("159", "Bank of China", "Bank of China México, S.A., Institución de Banca Múltiple", "BANK OF CHINA", BankKind::Commercial),
    ("160", "Banco S3", "Banco S3 México, S.A., Institución de Banca Múltiple", "BANCO S3", BankKind::Commercial),
    // Development banks (banca de desarrollo)
    ("006", "Bancomext", "Banco Nacional de Comercio Exterior, S.N.C., Institución de Banca de Desarrollo", "BANCOMEXT", BankKind::Development),
    ("009", "Banobras", "Banco Nacional de Obras y Servicios Públicos, S.N.C., Institución de Banca de Desarrollo", "BANOBRAS", BankKind::Development),
    ("019", "Banjercito", "Banco Nacional del Ejército, Fuerza Aérea y Armada, S.N.C., Institución de Banca de Desarrollo", "BANJERCITO", BankKind::Development),
    ("135", "Nafin", "Nacional Financiera, S.N.C., Institución de Banca de Desarrollo", "NAFIN", BankKind::Development),
    ("166", "Banco del Bienestar", "Banco del Bienestar, S.N.C., Institución de Banca de Desarrollo", "BANCO DEL BIENESTAR", BankKind::Development),
    ("168", "SHF", "Sociedad Hipotecaria Federal, S.N.C., Institución de Banca de Desarrollo", "HIPOTECARIA FEDERAL", BankKind::Development),
    // Popular savings and credit societies (SOFIPO)
    ("659", "ASP Integra", "Opciones Empresariales del Noreste, S.A. de C.V., Sociedad Financiera Popular", "ASP INTEGRA OPC", BankKind::Sofipo),
    ("670", "Libertad", "Libertad Servicios Financieros, S.A. de C.V., Sociedad Financiera Popular", "LIBERTAD", BankKind::Sofipo),
    // Payment institutions and transfer clearing houses
    ("646", "STP", "Sistema de Transferencias y Pagos STP, S.A. de C.V., Institución de Fondos de Pago Electrónico", "STP", BankKind::PaymentInstitution),
    ("706", "Arcus", "Arcus Financial Intelligence, S.A. de C.V., Institución de Fondos de Pago Electrónico", "ARCUS", BankKind::PaymentInstitution),
    ("710", "NVIO", "NVIO Pagos México, S.A. de C.V., Institución de Fondos de Pago Electrónico", "NVIO", BankKind::PaymentInstitution),
    ("722", "Mercado Pago", "Mercado Pago W, S.A. de C.V., Institución de Fondos de Pago Electrónico", "MERCADO PAGO W", BankKind::PaymentInstitution),
];

/// Materializes the embedded table as catalog records, in table order.
#[must_use]
pub fn records() -> Vec<BankRecord> {
    BANKS
        .iter()
        .map(|(code, short, full, display, kind)| {
            BankRecord::new(*code, *short, *full, *display, *kind)
        })
        .collect()
}
