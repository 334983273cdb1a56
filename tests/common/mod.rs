//! Planilhas e imagens de teste

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::io::Cursor;
use std::path::Path;

pub const PRICE_HEADER: [&str; 9] = [
    "Serviço",
    "Detalhe",
    "Característica",
    "Ambiente",
    "Mão de Obra",
    "Material",
    "Total",
    "Diagnóstico",
    "Solução",
];

/// Linha de preço: 4 campos descritivos, 3 preços, diagnóstico e solução
pub struct PriceRow<'a> {
    pub text: [&'a str; 4],
    pub prices: [Option<f64>; 3],
    pub diagnosis: &'a str,
    pub solution: &'a str,
}

/// Grava uma planilha de preços com as abas informadas
pub fn write_price_table(path: &Path, sheets: &[(&str, &[&str], Vec<PriceRow>)]) {
    let mut workbook = Workbook::new();

    for (name, header, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();

        for (col, title) in header.iter().enumerate() {
            worksheet.write_string(0, col as u16, *title).unwrap();
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            for (col, text) in row.text.iter().enumerate() {
                if !text.is_empty() {
                    worksheet.write_string(r, col as u16, *text).unwrap();
                }
            }
            for (offset, price) in row.prices.iter().enumerate() {
                if let Some(value) = price {
                    worksheet.write_number(r, 4 + offset as u16, *value).unwrap();
                }
            }
            if !row.diagnosis.is_empty() {
                worksheet.write_string(r, 7, row.diagnosis).unwrap();
            }
            if !row.solution.is_empty() {
                worksheet.write_string(r, 8, row.solution).unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Tabela com as três abas do catálogo embutido
pub fn write_sample_table(path: &Path) {
    write_price_table(
        path,
        &[
            (
                "Sifao",
                &PRICE_HEADER[..],
                vec![
                    PriceRow {
                        text: ["sifão", "duplo", "metal", "cozinha"],
                        prices: [Some(70.0), Some(50.0), Some(120.0)],
                        diagnosis: "junta gasta",
                        solution: "trocar sifão",
                    },
                    PriceRow {
                        text: ["sifão", "simples", "plástico", "banheiro"],
                        prices: [Some(50.0), Some(30.0), Some(80.0)],
                        diagnosis: "vazamento na junta",
                        solution: "trocar anel de vedação",
                    },
                ],
            ),
            (
                "Torneiras",
                &PRICE_HEADER[..],
                vec![PriceRow {
                    text: ["torneira", "monocomando", "", "cozinha"],
                    prices: [Some(90.0), Some(60.5), None],
                    diagnosis: "desgaste interno",
                    solution: "",
                }],
            ),
            (
                "Entupimentos",
                &PRICE_HEADER[..],
                vec![PriceRow {
                    text: ["desentupimento", "ralo", "", "banheiro"],
                    prices: [Some(120.0), Some(0.0), Some(120.0)],
                    diagnosis: "acúmulo de cabelo",
                    solution: "hidrojateamento",
                }],
            ),
        ],
    );
}

pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(4, 3, image::Rgb([200, 100, 50]));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
    buffer.into_inner()
}
