//! Built-in label presets.

use super::{CardText, ChartText, DashboardLabels, SliderText};

fn slider(label: &str, help: &str) -> SliderText {
    SliderText {
        label: label.to_string(),
        help: help.to_string(),
    }
}

fn card(label: &str, unit: &str, caption: &str) -> CardText {
    CardText {
        label: label.to_string(),
        unit: unit.to_string(),
        caption: caption.to_string(),
    }
}

fn chart(title: &str, y_label: &str, export_stem: &str) -> ChartText {
    ChartText {
        title: title.to_string(),
        y_label: y_label.to_string(),
        export_stem: export_stem.to_string(),
    }
}

impl DashboardLabels {
    pub fn english() -> Self {
        Self {
            page_title: "✨ Impact Visualizer - Project P4".to_string(),
            page_subtitle: "Low-impact plant-based sausage development".to_string(),
            page_intro: "Adjust the parameters to explore how the project's environmental, \
                social and economic impact projections change across production volume, \
                emission factor, water savings and market price scenarios."
                .to_string(),

            sidebar_header: "Simulation Parameters".to_string(),
            production_volume: slider(
                "Total Production Volume (tons/year):",
                "Total volume of product produced per year.",
            ),
            emission_factor: slider(
                "Avoided GHG Factor (tCO₂e/ton):",
                "GHG emissions avoided per ton of product.",
            ),
            water_factor: slider(
                "Water Saved (L/kg of replaced meat):",
                "Water saved per kg of replaced meat.",
            ),
            substitution_factor: slider(
                "Synthetic Input Substitution Factor (decimal):",
                "Share of synthetic inputs replaced by natural ones (e.g. 0.3 for 30%).",
            ),
            market_price: slider(
                "Plant-based Market Price (USD/ton):",
                "Estimated selling price per ton.",
            ),

            results_header: "Projected Annual Results:".to_string(),
            avoided_emissions: card(
                "🌎 Avoided GHG",
                "tCO₂e/year",
                "Reduction in greenhouse gas emissions.",
            ),
            water_saved: card(
                "💧 Water Saved",
                "m³/year",
                "Water saved in the production process.",
            ),
            inputs_replaced: card(
                "♻️ Synthetic Inputs Replaced",
                "tons/year",
                "Amount of synthetic ingredients replaced by natural ones.",
            ),
            estimated_revenue: card(
                "💰 Estimated Revenue",
                "USD",
                "Projected revenue from product sales.",
            ),
            jobs_created: card(
                "👥 Jobs Created",
                "",
                "New jobs created by the project.",
            ),
            industrial_symbiosis: card(
                "🤝 Industrial Symbiosis",
                "interactions",
                "Number of collaborations for resource exchange.",
            ),

            charts_header: "📊 Impact Charts".to_string(),
            baseline_category: "Baseline".to_string(),
            projection_category: "Projection".to_string(),
            emissions_chart: chart("Avoided GHG", "tCO₂e/year", "Avoided_Emissions"),
            water_chart: chart("Water Saved", "m³/year", "Water_Saved"),
            revenue_chart: chart("Estimated Revenue", "USD/year", "Estimated_Revenue"),

            downloads_header: "Download Charts Individually".to_string(),
            download_button: "Download {file}".to_string(),

            additional_info_header: "Additional Information:".to_string(),
            additional_info: "Progress and Recommendations: the project is in an advanced \
                pilot-scale validation phase, with technology development led by CREAS. \
                Significant progress has been made on the plant-based sausage formulation, \
                including taste, texture and shelf-life trials. Preliminary comparative \
                analyses of the product's carbon footprint against its animal equivalent \
                and imported plant-based alternatives show promising sustainability and \
                input-substitution results."
                .to_string(),
            attribution: "Visualizer created by the Sustrend SpA team for the TT GREEN Foods \
                Project"
                .to_string(),
            location: "Viña del Mar, Valparaíso, Chile".to_string(),
            version_footer: "Visualizer version: {version}".to_string(),
            credits: "Built with Bevy and egui".to_string(),

            logo_network_error: "Could not load the logos from their URLs. Please check the \
                links: {error}"
                .to_string(),
            logo_unexpected_error: "Unexpected error while processing the logo images: {error}"
                .to_string(),
        }
    }

    pub fn spanish() -> Self {
        Self {
            page_title: "✨ Visualizador de Impactos - Proyecto P4".to_string(),
            page_subtitle: "Desarrollo de salchichas plant based con bajo impacto ambiental"
                .to_string(),
            page_intro: "Ajusta los parámetros para explorar cómo las proyecciones de impacto \
                ambiental, social y económico del proyecto varían con diferentes escenarios \
                de volumen producido, factores de emisión, ahorro de agua y precio de mercado."
                .to_string(),

            sidebar_header: "Parámetros de Simulación".to_string(),
            production_volume: slider(
                "Volumen Total Producido (ton/año):",
                "Volumen total de producto producido anualmente.",
            ),
            emission_factor: slider(
                "Factor de GEI Evitados (tCO₂e/ton):",
                "Emisiones de GEI evitadas por tonelada de producto.",
            ),
            water_factor: slider(
                "Agua Ahorrada (L/kg de carne reemplazada):",
                "Ahorro de agua por kg de carne reemplazada.",
            ),
            substitution_factor: slider(
                "Factor de Sustitución de Insumos Sintéticos (decimal):",
                "Porcentaje de insumos sintéticos reemplazados por naturales (ej. 0.3 para 30%).",
            ),
            market_price: slider(
                "Precio de Mercado Plant-based (USD/ton):",
                "Precio de venta estimado por tonelada.",
            ),

            results_header: "Resultados Proyectados Anuales:".to_string(),
            avoided_emissions: card(
                "🌎 GEI Evitados",
                "tCO₂e/año",
                "Reducción de emisiones de gases de efecto invernadero.",
            ),
            water_saved: card(
                "💧 Agua Ahorrada",
                "m³/año",
                "Ahorro de agua en el proceso productivo.",
            ),
            inputs_replaced: card(
                "♻️ Insumos Sintéticos Reemplazados",
                "ton/año",
                "Cantidad de ingredientes sintéticos sustituidos por naturales.",
            ),
            estimated_revenue: card(
                "💰 Ingresos Estimados",
                "USD",
                "Ingresos proyectados por la venta del producto.",
            ),
            jobs_created: card(
                "👥 Empleos Generados",
                "",
                "Nuevos puestos de trabajo creados por el proyecto.",
            ),
            industrial_symbiosis: card(
                "🤝 Simbiosis Industrial",
                "interacciones",
                "Número de colaboraciones para el intercambio de recursos.",
            ),

            charts_header: "📊 Análisis Gráfico de Impactos".to_string(),
            baseline_category: "Línea Base".to_string(),
            projection_category: "Proyección".to_string(),
            emissions_chart: chart("GEI Evitados", "tCO₂e/año", "GEI_Evitados"),
            water_chart: chart("Agua Ahorrada", "m³/año", "Agua_Ahorrada"),
            revenue_chart: chart("Ingresos Estimados", "USD/año", "Ingresos_Estimados"),

            downloads_header: "Descargar Gráficos Individualmente".to_string(),
            download_button: "Descargar {file}".to_string(),

            additional_info_header: "Información Adicional:".to_string(),
            additional_info: "Estado de Avance y Recomendaciones: El proyecto se encuentra \
                actualmente en una fase de validación avanzada a escala piloto, con desarrollo \
                tecnológico liderado por CREAS. Se han logrado avances significativos en la \
                formulación de salchichas a base de plantas, incluyendo pruebas de sabor, \
                textura y conservación. Asimismo, se han realizado análisis comparativos \
                preliminares sobre la huella de carbono del producto respecto de su \
                equivalente animal y frente a alternativas plant based importadas, mostrando \
                resultados promisorios en términos de sostenibilidad ambiental y sustitución \
                de insumos."
                .to_string(),
            attribution: "Visualizador Creado por el equipo Sustrend SpA en el marco del \
                Proyecto TT GREEN Foods"
                .to_string(),
            location: "Viña del Mar, Valparaíso, Chile".to_string(),
            version_footer: "Versión del Visualizador: {version}".to_string(),
            credits: "Desarrollado con Bevy y egui".to_string(),

            logo_network_error: "Error al cargar los logos desde las URLs. Por favor, verifica \
                los enlaces: {error}"
                .to_string(),
            logo_unexpected_error: "Error inesperado al procesar las imágenes de los logos: \
                {error}"
                .to_string(),
        }
    }
}
