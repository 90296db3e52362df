// ==========================================
// Sistema de Gestión de Flota - Tipos de dominio
// ==========================================
// Enumeraciones cerradas del negocio: turnos, faenas, combustible,
// actividades, lugares y materiales. Los valores fuera de dominio no
// son representables.
// Formato de serialización: el mismo texto que se persiste en la base.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Turno
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turno {
    #[serde(rename = "Día")]
    Dia,
    #[serde(rename = "Noche")]
    Noche,
    #[serde(rename = "Horas Extras")]
    HorasExtras,
    #[serde(rename = "Trabajo Especial")]
    TrabajoEspecial,
}

impl Turno {
    pub fn db_str(&self) -> &'static str {
        match self {
            Turno::Dia => "Día",
            Turno::Noche => "Noche",
            Turno::HorasExtras => "Horas Extras",
            Turno::TrabajoEspecial => "Trabajo Especial",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Día" => Some(Turno::Dia),
            "Noche" => Some(Turno::Noche),
            "Horas Extras" => Some(Turno::HorasExtras),
            "Trabajo Especial" => Some(Turno::TrabajoEspecial),
            _ => None,
        }
    }
}

impl fmt::Display for Turno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_str())
    }
}

// ==========================================
// Faena (proyecto/lugar de trabajo del movimiento)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faena {
    #[serde(rename = "Mina El Way")]
    MinaElWay,
    #[serde(rename = "Mina Juana")]
    MinaJuana,
    #[serde(rename = "Mina Paty")]
    MinaPaty,
    #[serde(rename = "CBB Fábrica")]
    CbbFabrica,
}

impl Faena {
    pub fn db_str(&self) -> &'static str {
        match self {
            Faena::MinaElWay => "Mina El Way",
            Faena::MinaJuana => "Mina Juana",
            Faena::MinaPaty => "Mina Paty",
            Faena::CbbFabrica => "CBB Fábrica",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Mina El Way" => Some(Faena::MinaElWay),
            "Mina Juana" => Some(Faena::MinaJuana),
            "Mina Paty" => Some(Faena::MinaPaty),
            "CBB Fábrica" => Some(Faena::CbbFabrica),
            _ => None,
        }
    }
}

impl fmt::Display for Faena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_str())
    }
}

// ==========================================
// Origen de combustible
// ==========================================
// La variante "chip de otro equipo" exige detallar el equipo en el
// movimiento (ver engine::movimiento_rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrigenCombustible {
    #[serde(rename = "Estación Copec con Chip del Equipo")]
    EstacionChipEquipo,
    #[serde(rename = "Estación Copec con Chip de otro Equipo")]
    EstacionChipOtroEquipo,
    #[serde(rename = "Con Camión Combustible")]
    CamionCombustible,
    #[serde(rename = "Carga Manual Con Bidones")]
    CargaManualBidones,
}

impl OrigenCombustible {
    pub fn db_str(&self) -> &'static str {
        match self {
            OrigenCombustible::EstacionChipEquipo => "Estación Copec con Chip del Equipo",
            OrigenCombustible::EstacionChipOtroEquipo => "Estación Copec con Chip de otro Equipo",
            OrigenCombustible::CamionCombustible => "Con Camión Combustible",
            OrigenCombustible::CargaManualBidones => "Carga Manual Con Bidones",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Estación Copec con Chip del Equipo" => Some(OrigenCombustible::EstacionChipEquipo),
            "Estación Copec con Chip de otro Equipo" => {
                Some(OrigenCombustible::EstacionChipOtroEquipo)
            }
            "Con Camión Combustible" => Some(OrigenCombustible::CamionCombustible),
            "Carga Manual Con Bidones" => Some(OrigenCombustible::CargaManualBidones),
            _ => None,
        }
    }
}

impl fmt::Display for OrigenCombustible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_str())
    }
}

// ==========================================
// Nivel de combustible (estanque)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NivelCombustible {
    #[serde(rename = "vacio")]
    Vacio,
    #[serde(rename = "alarma")]
    Alarma,
    #[serde(rename = "un_cuarto")]
    UnCuarto,
    #[serde(rename = "medio")]
    Medio,
    #[serde(rename = "tres_cuartos")]
    TresCuartos,
    #[serde(rename = "full")]
    Full,
}

impl NivelCombustible {
    pub fn db_str(&self) -> &'static str {
        match self {
            NivelCombustible::Vacio => "vacio",
            NivelCombustible::Alarma => "alarma",
            NivelCombustible::UnCuarto => "un_cuarto",
            NivelCombustible::Medio => "medio",
            NivelCombustible::TresCuartos => "tres_cuartos",
            NivelCombustible::Full => "full",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "vacio" => Some(NivelCombustible::Vacio),
            "alarma" => Some(NivelCombustible::Alarma),
            "un_cuarto" => Some(NivelCombustible::UnCuarto),
            "medio" => Some(NivelCombustible::Medio),
            "tres_cuartos" => Some(NivelCombustible::TresCuartos),
            "full" => Some(NivelCombustible::Full),
            _ => None,
        }
    }
}

impl fmt::Display for NivelCombustible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_str())
    }
}

// ==========================================
// Tipo de actividad de una postura
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoActividad {
    #[serde(rename = "Producción")]
    Produccion,
    #[serde(rename = "Confinamiento")]
    Confinamiento,
    #[serde(rename = "Remanejo")]
    Remanejo,
    #[serde(rename = "Arriendo")]
    Arriendo,
    #[serde(rename = "Despacho")]
    Despacho,
    #[serde(rename = "Limpieza")]
    Limpieza,
    #[serde(rename = "Apoyo Mina")]
    ApoyoMina,
}

impl TipoActividad {
    pub fn db_str(&self) -> &'static str {
        match self {
            TipoActividad::Produccion => "Producción",
            TipoActividad::Confinamiento => "Confinamiento",
            TipoActividad::Remanejo => "Remanejo",
            TipoActividad::Arriendo => "Arriendo",
            TipoActividad::Despacho => "Despacho",
            TipoActividad::Limpieza => "Limpieza",
            TipoActividad::ApoyoMina => "Apoyo Mina",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Producción" => Some(TipoActividad::Produccion),
            "Confinamiento" => Some(TipoActividad::Confinamiento),
            "Remanejo" => Some(TipoActividad::Remanejo),
            "Arriendo" => Some(TipoActividad::Arriendo),
            "Despacho" => Some(TipoActividad::Despacho),
            "Limpieza" => Some(TipoActividad::Limpieza),
            "Apoyo Mina" => Some(TipoActividad::ApoyoMina),
            _ => None,
        }
    }
}

impl fmt::Display for TipoActividad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_str())
    }
}

// ==========================================
// Código de lugar (orígenes y destinos de postura)
// ==========================================
// Los códigos TA/LA/LA_C/LA_E/LA_M corresponden a sectores de mina y
// exigen el descriptor de sector completo (prefijo/banco/tiro).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodigoLugar {
    #[serde(rename = "TA")]
    Ta,
    #[serde(rename = "LA")]
    La,
    #[serde(rename = "LA_C")]
    LaC,
    #[serde(rename = "LA_E")]
    LaE,
    #[serde(rename = "LA_M")]
    LaM,
    #[serde(rename = "PCH")]
    Pch,
    #[serde(rename = "BA")]
    Ba,
    #[serde(rename = "BF")]
    Bf,
    #[serde(rename = "BTN")]
    Btn,
    #[serde(rename = "BTS")]
    Bts,
    #[serde(rename = "BE")]
    Be,
    #[serde(rename = "CS")]
    Cs,
    #[serde(rename = "CBBF")]
    Cbbf,
}

impl CodigoLugar {
    pub fn db_str(&self) -> &'static str {
        match self {
            CodigoLugar::Ta => "TA",
            CodigoLugar::La => "LA",
            CodigoLugar::LaC => "LA_C",
            CodigoLugar::LaE => "LA_E",
            CodigoLugar::LaM => "LA_M",
            CodigoLugar::Pch => "PCH",
            CodigoLugar::Ba => "BA",
            CodigoLugar::Bf => "BF",
            CodigoLugar::Btn => "BTN",
            CodigoLugar::Bts => "BTS",
            CodigoLugar::Be => "BE",
            CodigoLugar::Cs => "CS",
            CodigoLugar::Cbbf => "CBBF",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "TA" => Some(CodigoLugar::Ta),
            "LA" => Some(CodigoLugar::La),
            "LA_C" => Some(CodigoLugar::LaC),
            "LA_E" => Some(CodigoLugar::LaE),
            "LA_M" => Some(CodigoLugar::LaM),
            "PCH" => Some(CodigoLugar::Pch),
            "BA" => Some(CodigoLugar::Ba),
            "BF" => Some(CodigoLugar::Bf),
            "BTN" => Some(CodigoLugar::Btn),
            "BTS" => Some(CodigoLugar::Bts),
            "BE" => Some(CodigoLugar::Be),
            "CS" => Some(CodigoLugar::Cs),
            "CBBF" => Some(CodigoLugar::Cbbf),
            _ => None,
        }
    }

    /// Sectores de mina: exigen prefijo/banco/tiro en la postura
    pub fn es_origen_mina(&self) -> bool {
        matches!(
            self,
            CodigoLugar::Ta
                | CodigoLugar::La
                | CodigoLugar::LaC
                | CodigoLugar::LaE
                | CodigoLugar::LaM
        )
    }
}

impl fmt::Display for CodigoLugar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_str())
    }
}

// ==========================================
// Código de material
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodigoMaterial {
    #[serde(rename = "Cal Alta Ley")]
    CalAltaLey,
    #[serde(rename = "Cal Normal")]
    CalNormal,
    #[serde(rename = "Cal Cemento")]
    CalCemento,
    #[serde(rename = "Fino")]
    Fino,
    #[serde(rename = "Fino Ecometales")]
    FinoEcometales,
    #[serde(rename = "Fino Bitumix")]
    FinoBitumix,
    #[serde(rename = "Estéril")]
    Esteril,
    #[serde(rename = "Descarte")]
    Descarte,
    #[serde(rename = "Cal 15-50 AL")]
    Cal1550AltaLey,
    #[serde(rename = "Cal 15-50 N")]
    Cal1550Normal,
    #[serde(rename = "Cal 6-15 AL")]
    Cal615AltaLey,
    #[serde(rename = "Cal 6-15 N")]
    Cal615Normal,
    #[serde(rename = "Cemento")]
    Cemento,
}

impl CodigoMaterial {
    pub fn db_str(&self) -> &'static str {
        match self {
            CodigoMaterial::CalAltaLey => "Cal Alta Ley",
            CodigoMaterial::CalNormal => "Cal Normal",
            CodigoMaterial::CalCemento => "Cal Cemento",
            CodigoMaterial::Fino => "Fino",
            CodigoMaterial::FinoEcometales => "Fino Ecometales",
            CodigoMaterial::FinoBitumix => "Fino Bitumix",
            CodigoMaterial::Esteril => "Estéril",
            CodigoMaterial::Descarte => "Descarte",
            CodigoMaterial::Cal1550AltaLey => "Cal 15-50 AL",
            CodigoMaterial::Cal1550Normal => "Cal 15-50 N",
            CodigoMaterial::Cal615AltaLey => "Cal 6-15 AL",
            CodigoMaterial::Cal615Normal => "Cal 6-15 N",
            CodigoMaterial::Cemento => "Cemento",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Cal Alta Ley" => Some(CodigoMaterial::CalAltaLey),
            "Cal Normal" => Some(CodigoMaterial::CalNormal),
            "Cal Cemento" => Some(CodigoMaterial::CalCemento),
            "Fino" => Some(CodigoMaterial::Fino),
            "Fino Ecometales" => Some(CodigoMaterial::FinoEcometales),
            "Fino Bitumix" => Some(CodigoMaterial::FinoBitumix),
            "Estéril" => Some(CodigoMaterial::Esteril),
            "Descarte" => Some(CodigoMaterial::Descarte),
            "Cal 15-50 AL" => Some(CodigoMaterial::Cal1550AltaLey),
            "Cal 15-50 N" => Some(CodigoMaterial::Cal1550Normal),
            "Cal 6-15 AL" => Some(CodigoMaterial::Cal615AltaLey),
            "Cal 6-15 N" => Some(CodigoMaterial::Cal615Normal),
            "Cemento" => Some(CodigoMaterial::Cemento),
            _ => None,
        }
    }
}

impl fmt::Display for CodigoMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_str())
    }
}

// ==========================================
// Empresa de un supervisor
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmpresaSupervisor {
    #[serde(rename = "Tirreno")]
    Tirreno,
    #[serde(rename = "Mandante")]
    Mandante,
}

impl EmpresaSupervisor {
    pub fn db_str(&self) -> &'static str {
        match self {
            EmpresaSupervisor::Tirreno => "Tirreno",
            EmpresaSupervisor::Mandante => "Mandante",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Tirreno" => Some(EmpresaSupervisor::Tirreno),
            "Mandante" => Some(EmpresaSupervisor::Mandante),
            _ => None,
        }
    }
}

impl fmt::Display for EmpresaSupervisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_str())
    }
}

// ==========================================
// Categoría de equipo para el informe de producción
// ==========================================
// Maquinaria.tipo es texto libre; esta clasificación define las tres
// secciones del informe. Un tipo no clasificable queda fuera del
// informe de producción.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoriaEquipo {
    /// Cargador Frontal, Excavadora o Motoniveladora
    EquipoPesado,
    CamionTolva,
    CamionAljibe,
}

impl CategoriaEquipo {
    pub fn desde_tipo(tipo: &str) -> Option<Self> {
        match tipo {
            "Cargador Frontal" | "Excavadora" | "Motoniveladora" => {
                Some(CategoriaEquipo::EquipoPesado)
            }
            "Camión Tolva" => Some(CategoriaEquipo::CamionTolva),
            "Camión Aljibe" => Some(CategoriaEquipo::CamionAljibe),
            _ => None,
        }
    }
}
